pub mod plano;
pub mod plano_produto;
pub mod plano_produto_log;
pub mod produto;
