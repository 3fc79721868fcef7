use diesel::r2d2::PoolError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

use crate::domain::plano_produto_log::UnknownLogAction;

/// Result type returned by repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Failures surfaced by the persistence layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The targeted row does not exist.
    #[error("record not found")]
    NotFound,
    /// A uniqueness rule rejected the write.
    #[error("conflict: {0}")]
    Conflict(String),
    /// A row the write depends on does not exist.
    #[error("missing reference: {0}")]
    MissingReference(String),
    /// A stored value could not be mapped to the domain.
    #[error("invalid stored data: {0}")]
    InvalidData(String),
    /// Any other database failure.
    #[error("database error: {0}")]
    Database(DieselError),
    /// No connection could be checked out of the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),
}

impl From<DieselError> for RepositoryError {
    fn from(value: DieselError) -> Self {
        match value {
            DieselError::NotFound => Self::NotFound,
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                Self::Conflict(info.message().to_string())
            }
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                Self::MissingReference(info.message().to_string())
            }
            other => Self::Database(other),
        }
    }
}

impl From<UnknownLogAction> for RepositoryError {
    fn from(value: UnknownLogAction) -> Self {
        Self::InvalidData(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diesel_not_found_maps_to_not_found() {
        let err = RepositoryError::from(DieselError::NotFound);
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[test]
    fn unique_violation_maps_to_conflict() {
        let err = RepositoryError::from(DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("UNIQUE constraint failed: plano_produto.plano_id".to_string()),
        ));
        assert!(matches!(err, RepositoryError::Conflict(message) if message.contains("plano_produto")));
    }

    #[test]
    fn foreign_key_violation_maps_to_missing_reference() {
        let err = RepositoryError::from(DieselError::DatabaseError(
            DatabaseErrorKind::ForeignKeyViolation,
            Box::new("FOREIGN KEY constraint failed".to_string()),
        ));
        assert!(matches!(err, RepositoryError::MissingReference(_)));
    }

    #[test]
    fn other_database_errors_are_kept() {
        let err = RepositoryError::from(DieselError::RollbackTransaction);
        assert!(matches!(err, RepositoryError::Database(_)));
    }

    #[test]
    fn unknown_action_is_invalid_data() {
        let err = RepositoryError::from(UnknownLogAction("x".to_string()));
        assert!(matches!(err, RepositoryError::InvalidData(_)));
    }
}
