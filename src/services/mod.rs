pub mod associations;
pub mod errors;
pub mod logs;
pub mod planos;
pub mod produtos;

pub use errors::{Entity, ServiceError, ServiceResult};
