use std::collections::HashMap;

use diesel::dsl::{exists, select};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::plano::{
    NewPlano as DomainNewPlano, Plano as DomainPlano, PlanoWithProdutos,
    UpdatePlano as DomainUpdatePlano,
};
use crate::domain::produto::Produto as DomainProduto;
use crate::models::plano::{NewPlano as DbNewPlano, Plano as DbPlano, UpdatePlano as DbUpdatePlano};
use crate::models::produto::Produto as DbProduto;
use crate::repository::plano_produto::link_produto;
use crate::repository::plano_produto_log::load_logs_for_planos;
use crate::repository::{
    DieselRepository, PlanoReader, PlanoWriter, RepositoryError, RepositoryResult,
};

impl PlanoReader for DieselRepository {
    fn get_plano_by_id(&self, id: i32) -> RepositoryResult<Option<DomainPlano>> {
        use crate::schema::planos;

        let mut conn = self.conn()?;
        let plano = planos::table
            .find(id)
            .first::<DbPlano>(&mut conn)
            .optional()?;

        Ok(plano.map(DomainPlano::from))
    }

    fn get_plano_with_produtos(&self, id: i32) -> RepositoryResult<Option<PlanoWithProdutos>> {
        use crate::schema::planos;

        let mut conn = self.conn()?;
        let plano = planos::table
            .find(id)
            .first::<DbPlano>(&mut conn)
            .optional()?;

        let Some(plano) = plano else {
            return Ok(None);
        };

        Ok(load_aggregates(&mut conn, vec![plano])?.pop())
    }

    fn list_planos(&self) -> RepositoryResult<Vec<DomainPlano>> {
        use crate::schema::planos;

        let mut conn = self.conn()?;
        let planos = planos::table
            .order(planos::id.asc())
            .load::<DbPlano>(&mut conn)?;

        Ok(planos.into_iter().map(DomainPlano::from).collect())
    }

    fn list_planos_with_produtos(&self) -> RepositoryResult<Vec<PlanoWithProdutos>> {
        use crate::schema::planos;

        let mut conn = self.conn()?;
        let planos = planos::table
            .order(planos::id.asc())
            .load::<DbPlano>(&mut conn)?;

        load_aggregates(&mut conn, planos)
    }
}

impl PlanoWriter for DieselRepository {
    fn create_plano(
        &self,
        new_plano: &DomainNewPlano,
        produto_id: i32,
    ) -> RepositoryResult<PlanoWithProdutos> {
        use crate::schema::{planos, produtos};

        let mut conn = self.conn()?;

        conn.immediate_transaction::<_, RepositoryError, _>(|conn| {
            let produto_exists = select(exists(produtos::table.find(produto_id)))
                .get_result::<bool>(conn)?;
            if !produto_exists {
                return Err(RepositoryError::MissingReference(format!(
                    "produto {produto_id}"
                )));
            }

            let created = diesel::insert_into(planos::table)
                .values(&DbNewPlano::from(new_plano))
                .get_result::<DbPlano>(conn)?;

            link_produto(conn, created.id, produto_id)?;

            load_aggregates(conn, vec![created])?
                .pop()
                .ok_or(RepositoryError::NotFound)
        })
    }

    fn update_plano(
        &self,
        plano_id: i32,
        updates: &DomainUpdatePlano,
    ) -> RepositoryResult<DomainPlano> {
        use crate::schema::planos;

        let mut conn = self.conn()?;
        let db_updates = DbUpdatePlano::from(updates);

        let updated = diesel::update(planos::table.find(plano_id))
            .set(&db_updates)
            .get_result::<DbPlano>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_plano(&self, plano_id: i32) -> RepositoryResult<DomainPlano> {
        use crate::schema::planos;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(planos::table.find(plano_id))
            .get_result::<DbPlano>(&mut conn)
            .optional()?;

        match deleted {
            Some(plano) => Ok(plano.into()),
            None => Err(RepositoryError::NotFound),
        }
    }
}

/// Attach products and history to each plan, preserving the input order.
fn load_aggregates(
    conn: &mut SqliteConnection,
    planos: Vec<DbPlano>,
) -> RepositoryResult<Vec<PlanoWithProdutos>> {
    if planos.is_empty() {
        return Ok(Vec::new());
    }

    let plano_ids: Vec<i32> = planos.iter().map(|plano| plano.id).collect();
    let mut produtos_by_plano = load_produtos_for_planos(conn, &plano_ids)?;
    let logs_by_plano = load_logs_for_planos(conn, &planos)?;

    let aggregates = planos
        .into_iter()
        .zip(logs_by_plano)
        .map(|(plano, logs)| {
            let produtos = produtos_by_plano.remove(&plano.id).unwrap_or_default();
            PlanoWithProdutos {
                plano: plano.into(),
                produtos,
                logs,
            }
        })
        .collect();

    Ok(aggregates)
}

fn load_produtos_for_planos(
    conn: &mut SqliteConnection,
    plano_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<DomainProduto>>> {
    use crate::schema::{plano_produto, produtos};

    let rows = plano_produto::table
        .inner_join(produtos::table)
        .filter(plano_produto::plano_id.eq_any(plano_ids))
        .order(produtos::id.asc())
        .select((plano_produto::plano_id, DbProduto::as_select()))
        .load::<(i32, DbProduto)>(conn)?;

    let mut map: HashMap<i32, Vec<DomainProduto>> = HashMap::new();
    for (plano_id, produto) in rows {
        map.entry(plano_id).or_default().push(produto.into());
    }

    Ok(map)
}
