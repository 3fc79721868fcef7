use std::fmt;

use thiserror::Error;

use crate::forms::FieldErrors;
use crate::repository::RepositoryError;

/// Result type returned by the service layer.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Entity whose lookup failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Plano,
    Produto,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plano => f.write_str("plano"),
            Self::Produto => f.write_str("produto"),
        }
    }
}

/// Failures surfaced to the API layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request payload was missing fields or malformed.
    #[error("validation failed: {0}")]
    Validation(FieldErrors),
    /// The referenced entity does not exist.
    #[error("{0} not found")]
    NotFound(Entity),
    /// The product is already attached to the plan.
    #[error("product already associated with plan")]
    Conflict,
    /// Storage failed; the transaction, if any, was rolled back.
    #[error("persistence failure: {0}")]
    Persistence(RepositoryError),
}

impl ServiceError {
    /// Map a repository failure on a lookup or write that targets `entity`.
    pub fn for_entity(err: RepositoryError, entity: Entity) -> Self {
        match err {
            RepositoryError::NotFound => Self::NotFound(entity),
            other => Self::from(other),
        }
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::Conflict(_) => Self::Conflict,
            other => Self::Persistence(other),
        }
    }
}

impl From<FieldErrors> for ServiceError {
    fn from(value: FieldErrors) -> Self {
        Self::Validation(value)
    }
}
