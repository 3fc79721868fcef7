use mockall::mock;

use super::{
    PlanoProdutoLogReader, PlanoProdutoWriter, PlanoReader, PlanoWriter, ProdutoReader,
    ProdutoWriter, RepositoryResult,
};
use crate::domain::{
    plano::{NewPlano, Plano, PlanoWithProdutos, UpdatePlano},
    plano_produto_log::{LogListQuery, PlanoProdutoLog, PlanoProdutoLogEntry},
    produto::{NewProduto, Produto, UpdateProduto},
};

mock! {
    pub Repository {}

    impl PlanoReader for Repository {
        fn get_plano_by_id(&self, id: i32) -> RepositoryResult<Option<Plano>>;
        fn get_plano_with_produtos(&self, id: i32) -> RepositoryResult<Option<PlanoWithProdutos>>;
        fn list_planos(&self) -> RepositoryResult<Vec<Plano>>;
        fn list_planos_with_produtos(&self) -> RepositoryResult<Vec<PlanoWithProdutos>>;
    }

    impl PlanoWriter for Repository {
        fn create_plano(&self, new_plano: &NewPlano, produto_id: i32) -> RepositoryResult<PlanoWithProdutos>;
        fn update_plano(&self, plano_id: i32, updates: &UpdatePlano) -> RepositoryResult<Plano>;
        fn delete_plano(&self, plano_id: i32) -> RepositoryResult<Plano>;
    }

    impl ProdutoReader for Repository {
        fn get_produto_by_id(&self, id: i32) -> RepositoryResult<Option<Produto>>;
        fn list_produtos(&self) -> RepositoryResult<Vec<Produto>>;
    }

    impl ProdutoWriter for Repository {
        fn create_produto(&self, new_produto: &NewProduto) -> RepositoryResult<Produto>;
        fn update_produto(&self, produto_id: i32, updates: &UpdateProduto) -> RepositoryResult<Produto>;
        fn delete_produto(&self, produto_id: i32) -> RepositoryResult<Produto>;
    }

    impl PlanoProdutoWriter for Repository {
        fn attach_produto(&self, plano_id: i32, produto_id: i32) -> RepositoryResult<PlanoProdutoLog>;
        fn detach_produto(&self, plano_id: i32, produto_id: i32) -> RepositoryResult<Option<PlanoProdutoLog>>;
    }

    impl PlanoProdutoLogReader for Repository {
        fn list_logs(&self, query: LogListQuery) -> RepositoryResult<(usize, Vec<PlanoProdutoLogEntry>)>;
    }
}
