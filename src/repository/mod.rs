//! Persistence port for client records and its implementations.

use crate::db::{DbConnection, DbPool};
use crate::domain::client::Client;
use crate::domain::types::{DocumentNumber, DocumentType};
use crate::repository::errors::RepositoryResult;

pub mod client;
pub mod errors;
pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub trait ClientReader {
    /// Returns the client stored under the key, `None` when absent.
    fn get_client_by_document(
        &self,
        document_type: &DocumentType,
        document_number: DocumentNumber,
    ) -> RepositoryResult<Option<Client>>;
}

pub trait ClientWriter {
    /// Persists a new client. Duplicate keys are rejected by the store.
    fn create_client(&self, client: &Client) -> RepositoryResult<()>;
}

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(crate::db::get_connection(&self.pool)?)
    }
}
