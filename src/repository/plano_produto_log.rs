use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::plano_produto_log::{
    LogAction, LogListQuery, PlanoProdutoLog as DomainPlanoProdutoLog, PlanoProdutoLogEntry,
};
use crate::models::plano::Plano as DbPlano;
use crate::models::plano_produto_log::PlanoProdutoLog as DbPlanoProdutoLog;
use crate::repository::{DieselRepository, PlanoProdutoLogReader, RepositoryResult};

impl PlanoProdutoLogReader for DieselRepository {
    fn list_logs(
        &self,
        query: LogListQuery,
    ) -> RepositoryResult<(usize, Vec<PlanoProdutoLogEntry>)> {
        use crate::schema::{plano_produto_logs, produtos};

        let mut conn = self.conn()?;

        let total = plano_produto_logs::table
            .count()
            .get_result::<i64>(&mut conn)? as usize;

        let mut items = plano_produto_logs::table
            .inner_join(produtos::table)
            .select((DbPlanoProdutoLog::as_select(), produtos::nome))
            .order((
                plano_produto_logs::created_at.asc(),
                plano_produto_logs::id.asc(),
            ))
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(pagination) = &query.pagination {
            items = items.offset(pagination.offset()).limit(pagination.limit());
        }

        let rows = items.load::<(DbPlanoProdutoLog, String)>(&mut conn)?;

        let mut entries = Vec::with_capacity(rows.len());
        for (log, nome) in rows {
            entries.push(PlanoProdutoLogEntry {
                plano_id: log.plano_id,
                produto_id: log.produto_id,
                nome,
                action: LogAction::try_from(log.action.as_str())?,
                created_at: log.created_at,
            });
        }

        Ok((total, entries))
    }
}

/// Load the history of each plan, aligned with `planos`, oldest first.
pub(crate) fn load_logs_for_planos(
    conn: &mut SqliteConnection,
    planos: &[DbPlano],
) -> RepositoryResult<Vec<Vec<DomainPlanoProdutoLog>>> {
    use crate::schema::plano_produto_logs;

    if planos.is_empty() {
        return Ok(Vec::new());
    }

    let logs = DbPlanoProdutoLog::belonging_to(planos)
        .select(DbPlanoProdutoLog::as_select())
        .order((
            plano_produto_logs::created_at.asc(),
            plano_produto_logs::id.asc(),
        ))
        .load::<DbPlanoProdutoLog>(conn)?;

    let mut grouped = Vec::with_capacity(planos.len());
    for group in logs.grouped_by(planos) {
        let converted = group
            .into_iter()
            .map(DomainPlanoProdutoLog::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        grouped.push(converted);
    }

    Ok(grouped)
}
