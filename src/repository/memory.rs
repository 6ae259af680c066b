//! In-process client store backed by a mutex-guarded map.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::client::Client;
use crate::domain::types::{DocumentNumber, DocumentType};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ClientReader, ClientWriter};

type ClientKey = (DocumentType, DocumentNumber);

/// Keeps clients in memory and rejects duplicate keys like the SQLite
/// primary key does.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    clients: Mutex<HashMap<ClientKey, Client>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-populated with the given clients.
    pub fn with_clients(clients: impl IntoIterator<Item = Client>) -> Self {
        let clients = clients
            .into_iter()
            .map(|c| ((c.document_type.clone(), c.document_number), c))
            .collect();
        Self {
            clients: Mutex::new(clients),
        }
    }

    /// Number of stored clients.
    pub fn len(&self) -> RepositoryResult<usize> {
        self.lock().map(|clients| clients.len())
    }

    pub fn is_empty(&self) -> RepositoryResult<bool> {
        self.len().map(|len| len == 0)
    }

    fn lock(&self) -> RepositoryResult<std::sync::MutexGuard<'_, HashMap<ClientKey, Client>>> {
        self.clients
            .lock()
            .map_err(|e| RepositoryError::Unexpected(format!("Client store poisoned: {e}")))
    }
}

impl ClientReader for InMemoryRepository {
    fn get_client_by_document(
        &self,
        document_type: &DocumentType,
        document_number: DocumentNumber,
    ) -> RepositoryResult<Option<Client>> {
        let clients = self.lock()?;
        Ok(clients
            .get(&(document_type.clone(), document_number))
            .cloned())
    }
}

impl ClientWriter for InMemoryRepository {
    fn create_client(&self, client: &Client) -> RepositoryResult<()> {
        let mut clients = self.lock()?;
        let key = (client.document_type.clone(), client.document_number);
        if clients.contains_key(&key) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "Duplicate client key: {}/{}",
                key.0, key.1
            )));
        }
        clients.insert(key, client.clone());
        Ok(())
    }
}
