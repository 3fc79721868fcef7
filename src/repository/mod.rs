use crate::db::{DbConnection, DbPool};
use crate::domain::plano::{NewPlano, Plano, PlanoWithProdutos, UpdatePlano};
use crate::domain::plano_produto_log::{LogListQuery, PlanoProdutoLog, PlanoProdutoLogEntry};
use crate::domain::produto::{NewProduto, Produto, UpdateProduto};

pub mod errors;
pub mod plano;
pub mod plano_produto;
pub mod plano_produto_log;
pub mod produto;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over plan records.
pub trait PlanoReader {
    fn get_plano_by_id(&self, id: i32) -> RepositoryResult<Option<Plano>>;
    fn get_plano_with_produtos(&self, id: i32) -> RepositoryResult<Option<PlanoWithProdutos>>;
    fn list_planos(&self) -> RepositoryResult<Vec<Plano>>;
    fn list_planos_with_produtos(&self) -> RepositoryResult<Vec<PlanoWithProdutos>>;
}

/// Write operations over plan records.
pub trait PlanoWriter {
    /// Insert a plan and attach `produto_id` to it in one transaction,
    /// logging the attachment. Fails with
    /// [`RepositoryError::MissingReference`] when the product does not exist.
    fn create_plano(
        &self,
        new_plano: &NewPlano,
        produto_id: i32,
    ) -> RepositoryResult<PlanoWithProdutos>;
    fn update_plano(&self, plano_id: i32, updates: &UpdatePlano) -> RepositoryResult<Plano>;
    /// Delete a plan, returning the removed row. Join rows and logs cascade.
    fn delete_plano(&self, plano_id: i32) -> RepositoryResult<Plano>;
}

/// Read-only operations over product records.
pub trait ProdutoReader {
    fn get_produto_by_id(&self, id: i32) -> RepositoryResult<Option<Produto>>;
    fn list_produtos(&self) -> RepositoryResult<Vec<Produto>>;
}

/// Write operations over product records.
pub trait ProdutoWriter {
    fn create_produto(&self, new_produto: &NewProduto) -> RepositoryResult<Produto>;
    fn update_produto(&self, produto_id: i32, updates: &UpdateProduto)
    -> RepositoryResult<Produto>;
    /// Delete a product, returning the removed row. Join rows and logs cascade.
    fn delete_produto(&self, produto_id: i32) -> RepositoryResult<Produto>;
}

/// Transactional changes to the plan/product association.
///
/// Each call mutates the join table and appends the matching log row in a
/// single transaction; either both persist or neither does.
pub trait PlanoProdutoWriter {
    /// Attach a product, failing with [`RepositoryError::Conflict`] when the
    /// pair is already associated.
    fn attach_produto(&self, plano_id: i32, produto_id: i32) -> RepositoryResult<PlanoProdutoLog>;
    /// Detach a product. Returns `None` without logging when the pair was
    /// not associated.
    fn detach_produto(
        &self,
        plano_id: i32,
        produto_id: i32,
    ) -> RepositoryResult<Option<PlanoProdutoLog>>;
}

/// Read-only access to the activity log.
pub trait PlanoProdutoLogReader {
    fn list_logs(
        &self,
        query: LogListQuery,
    ) -> RepositoryResult<(usize, Vec<PlanoProdutoLogEntry>)>;
}
