//! Shared helpers for integration tests.

use clientes::db::{DbPool, establish_connection_pool, run_migrations};
use clientes::domain::client::Client;
use clientes::domain::types::{DocumentNumber, DocumentType};
use tempfile::TempDir;

/// SQLite database in a temporary directory with migrations applied.
///
/// The directory (and the database file) is removed on drop.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(filename);
        let url = path.to_str().expect("utf-8 temp path").to_string();
        let pool = establish_connection_pool(&url).expect("create pool");
        run_migrations(&pool).expect("run migrations");
        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[allow(dead_code)]
pub fn sample_client(document_type: &str, document_number: i64, first_name: &str) -> Client {
    Client {
        document_type: DocumentType::new(document_type).expect("valid document type"),
        document_number: DocumentNumber::new(document_number).expect("valid document number"),
        first_name: first_name.to_string(),
        middle_name: "Andrés".to_string(),
        last_name: "Gómez".to_string(),
        second_last_name: "Restrepo".to_string(),
        phone: "300-1234567".to_string(),
        address: "Calle 10 # 20-30".to_string(),
        city: "Bogotá".to_string(),
    }
}
