use diesel::r2d2::{Error as R2D2Error, PoolError};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Failures raised by the storage layer on lookup or insert.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::DatabaseError(kind, info) => {
                let message = info.message().to_string();
                let constraint = match kind {
                    DatabaseErrorKind::UniqueViolation => "Duplicate client key",
                    DatabaseErrorKind::CheckViolation => "Check constraint violation",
                    DatabaseErrorKind::NotNullViolation => "Not null constraint violation",
                    DatabaseErrorKind::ForeignKeyViolation => "Foreign key constraint violation",
                    _ => return RepositoryError::DatabaseError(message),
                };
                RepositoryError::ConstraintViolation(format!("{constraint}: {message}"))
            }

            DieselError::SerializationError(e) => {
                RepositoryError::ValidationError(format!("Serialization error: {e}"))
            }

            DieselError::DeserializationError(e) => {
                RepositoryError::ValidationError(format!("Deserialization error: {e}"))
            }

            DieselError::QueryBuilderError(e) => {
                RepositoryError::ValidationError(format!("Query builder error: {e}"))
            }

            _ => RepositoryError::Unexpected(format!("Unexpected diesel error: {err}")),
        }
    }
}

impl From<R2D2Error> for RepositoryError {
    fn from(err: R2D2Error) -> Self {
        RepositoryError::ConnectionError(format!("Connection error: {err}"))
    }
}

impl From<PoolError> for RepositoryError {
    fn from(err: PoolError) -> Self {
        RepositoryError::ConnectionError(format!("Connection error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn database_error(kind: DatabaseErrorKind, message: &str) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(message.to_string()))
    }

    #[test]
    fn unique_violation_maps_to_constraint_violation() {
        let err = database_error(
            DatabaseErrorKind::UniqueViolation,
            "UNIQUE constraint failed: clients.document_type, clients.document_number",
        );

        match RepositoryError::from(err) {
            RepositoryError::ConstraintViolation(message) => {
                assert!(message.starts_with("Duplicate client key"));
                assert!(message.contains("UNIQUE constraint failed"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn other_database_errors_keep_their_message() {
        let err = database_error(DatabaseErrorKind::Unknown, "database is locked");

        assert_eq!(
            RepositoryError::from(err).to_string(),
            "Database error: database is locked"
        );
    }

    #[test]
    fn stray_diesel_not_found_is_unexpected() {
        // Lookups use `.optional()`, so absence never arrives as an error.
        assert!(matches!(
            RepositoryError::from(DieselError::NotFound),
            RepositoryError::Unexpected(_)
        ));
    }
}
