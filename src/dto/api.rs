//! Response payloads of the `/clients` API.

use serde::Serialize;

/// Body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable description of the failure.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
