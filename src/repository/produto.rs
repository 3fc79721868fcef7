use diesel::prelude::*;

use crate::domain::produto::{
    NewProduto as DomainNewProduto, Produto as DomainProduto,
    UpdateProduto as DomainUpdateProduto,
};
use crate::models::produto::{
    NewProduto as DbNewProduto, Produto as DbProduto, UpdateProduto as DbUpdateProduto,
};
use crate::repository::{
    DieselRepository, ProdutoReader, ProdutoWriter, RepositoryError, RepositoryResult,
};

impl ProdutoReader for DieselRepository {
    fn get_produto_by_id(&self, id: i32) -> RepositoryResult<Option<DomainProduto>> {
        use crate::schema::produtos;

        let mut conn = self.conn()?;
        let produto = produtos::table
            .find(id)
            .first::<DbProduto>(&mut conn)
            .optional()?;

        Ok(produto.map(DomainProduto::from))
    }

    fn list_produtos(&self) -> RepositoryResult<Vec<DomainProduto>> {
        use crate::schema::produtos;

        let mut conn = self.conn()?;
        let produtos = produtos::table
            .order(produtos::id.asc())
            .load::<DbProduto>(&mut conn)?;

        Ok(produtos.into_iter().map(DomainProduto::from).collect())
    }
}

impl ProdutoWriter for DieselRepository {
    fn create_produto(&self, new_produto: &DomainNewProduto) -> RepositoryResult<DomainProduto> {
        use crate::schema::produtos;

        let mut conn = self.conn()?;
        let insertable = DbNewProduto::from(new_produto);

        let created = diesel::insert_into(produtos::table)
            .values(&insertable)
            .get_result::<DbProduto>(&mut conn)?;

        Ok(created.into())
    }

    fn update_produto(
        &self,
        produto_id: i32,
        updates: &DomainUpdateProduto,
    ) -> RepositoryResult<DomainProduto> {
        use crate::schema::produtos;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateProduto::from(updates);

        let updated = diesel::update(produtos::table.find(produto_id))
            .set(&db_updates)
            .get_result::<DbProduto>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_produto(&self, produto_id: i32) -> RepositoryResult<DomainProduto> {
        use crate::schema::produtos;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(produtos::table.find(produto_id))
            .get_result::<DbProduto>(&mut conn)
            .optional()?;

        deleted
            .map(DomainProduto::from)
            .ok_or(RepositoryError::NotFound)
    }
}
