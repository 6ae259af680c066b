//! Request input definitions validated at the HTTP boundary.

use thiserror::Error;

use crate::services::ServiceError;

pub mod client;

#[derive(Debug, Error, PartialEq, Eq)]
/// Errors that can occur when validating request input.
pub enum FormError {
    #[error("document type must not be blank")]
    BlankDocumentType,

    #[error("document number must be greater than zero")]
    NonPositiveDocumentNumber,
}

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}
