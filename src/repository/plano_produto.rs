use diesel::dsl::{exists, select};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::plano_produto_log::{
    LogAction, NewPlanoProdutoLog as DomainNewPlanoProdutoLog,
    PlanoProdutoLog as DomainPlanoProdutoLog,
};
use crate::models::plano_produto::NewPlanoProduto as DbNewPlanoProduto;
use crate::models::plano_produto_log::{
    NewPlanoProdutoLog as DbNewPlanoProdutoLog, PlanoProdutoLog as DbPlanoProdutoLog,
};
use crate::repository::{DieselRepository, PlanoProdutoWriter, RepositoryError, RepositoryResult};

impl PlanoProdutoWriter for DieselRepository {
    fn attach_produto(
        &self,
        plano_id: i32,
        produto_id: i32,
    ) -> RepositoryResult<DomainPlanoProdutoLog> {
        let mut conn = self.conn()?;

        conn.immediate_transaction::<_, RepositoryError, _>(|conn| {
            link_produto(conn, plano_id, produto_id)
        })
    }

    fn detach_produto(
        &self,
        plano_id: i32,
        produto_id: i32,
    ) -> RepositoryResult<Option<DomainPlanoProdutoLog>> {
        use crate::schema::plano_produto;

        let mut conn = self.conn()?;

        conn.immediate_transaction::<_, RepositoryError, _>(|conn| {
            let removed = diesel::delete(
                plano_produto::table
                    .filter(plano_produto::plano_id.eq(plano_id))
                    .filter(plano_produto::produto_id.eq(produto_id)),
            )
            .execute(conn)?;

            if removed == 0 {
                return Ok(None);
            }

            let log = DomainNewPlanoProdutoLog::new(plano_id, produto_id, LogAction::Removido);
            append_log(conn, &log).map(Some)
        })
    }
}

/// Insert the join row and its `Adicionado` log row on an open transaction.
///
/// The existence check gives a readable conflict; the composite primary key
/// still rejects a duplicate that slips past it.
pub(crate) fn link_produto(
    conn: &mut SqliteConnection,
    plano_id: i32,
    produto_id: i32,
) -> RepositoryResult<DomainPlanoProdutoLog> {
    use crate::schema::plano_produto;

    let already_linked = select(exists(
        plano_produto::table
            .filter(plano_produto::plano_id.eq(plano_id))
            .filter(plano_produto::produto_id.eq(produto_id)),
    ))
    .get_result::<bool>(conn)?;

    if already_linked {
        return Err(RepositoryError::Conflict(format!(
            "produto {produto_id} is already attached to plano {plano_id}"
        )));
    }

    diesel::insert_into(plano_produto::table)
        .values(&DbNewPlanoProduto::new(plano_id, produto_id))
        .execute(conn)?;

    let log = DomainNewPlanoProdutoLog::new(plano_id, produto_id, LogAction::Adicionado);
    append_log(conn, &log)
}

fn append_log(
    conn: &mut SqliteConnection,
    new_log: &DomainNewPlanoProdutoLog,
) -> RepositoryResult<DomainPlanoProdutoLog> {
    use crate::schema::plano_produto_logs;

    let created = diesel::insert_into(plano_produto_logs::table)
        .values(&DbNewPlanoProdutoLog::from(new_log))
        .get_result::<DbPlanoProdutoLog>(conn)?;

    Ok(DomainPlanoProdutoLog::try_from(created)?)
}
