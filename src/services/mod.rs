//! Business logic between the transport boundary and the client store.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod client;
#[cfg(feature = "server")]
pub mod seed;

/// Error kinds surfaced to callers of the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed input rejected before reaching storage.
    #[error("validation error: {0}")]
    Validation(String),

    /// No client matches the requested key.
    #[error("client not found")]
    NotFound,

    /// Failure reported by the storage layer, carried unchanged.
    #[error("storage error: {0}")]
    Storage(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
