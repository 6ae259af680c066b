//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::client::Client;
use crate::domain::types::{DocumentNumber, DocumentType};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientReader, ClientWriter};

mock! {
    pub Repository {}

    impl ClientReader for Repository {
        fn get_client_by_document(
            &self,
            document_type: &DocumentType,
            document_number: DocumentNumber,
        ) -> RepositoryResult<Option<Client>>;
    }

    impl ClientWriter for Repository {
        fn create_client(&self, client: &Client) -> RepositoryResult<()>;
    }
}
