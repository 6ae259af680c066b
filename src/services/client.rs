use crate::domain::client::Client;
use crate::domain::types::{DocumentNumber, DocumentType};
use crate::repository::{ClientReader, ClientWriter};
use crate::services::{ServiceError, ServiceResult};

/// Fetches the client stored under `(document_type, document_number)`.
///
/// Absence is reported as `Ok(None)`. Storage failures are returned as
/// [`ServiceError::Storage`] without retry.
pub fn get_client<R>(
    repo: &R,
    document_type: &DocumentType,
    document_number: DocumentNumber,
) -> ServiceResult<Option<Client>>
where
    R: ClientReader + ?Sized,
{
    log::info!("Looking up client {document_type}/{document_number}");

    match repo.get_client_by_document(document_type, document_number) {
        Ok(Some(client)) => {
            log::info!("Client {document_type}/{document_number} found");
            Ok(Some(client))
        }
        Ok(None) => {
            log::warn!("Client {document_type}/{document_number} not found");
            Ok(None)
        }
        Err(err) => {
            log::error!("Failed to get client {document_type}/{document_number}: {err}");
            Err(ServiceError::from(err))
        }
    }
}

/// Persists a new client record.
pub fn create_client<R>(repo: &R, client: &Client) -> ServiceResult<()>
where
    R: ClientWriter + ?Sized,
{
    log::info!(
        "Creating client {}/{}",
        client.document_type,
        client.document_number
    );

    repo.create_client(client).map_err(|err| {
        log::error!(
            "Failed to create client {}/{}: {err}",
            client.document_type,
            client.document_number
        );
        ServiceError::from(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::errors::{RepositoryError, RepositoryResult};
    use crate::repository::memory::InMemoryRepository;

    struct BrokenRepo;

    impl ClientReader for BrokenRepo {
        fn get_client_by_document(
            &self,
            _document_type: &DocumentType,
            _document_number: DocumentNumber,
        ) -> RepositoryResult<Option<Client>> {
            Err(RepositoryError::ConnectionError("connection refused".to_string()))
        }
    }

    impl ClientWriter for BrokenRepo {
        fn create_client(&self, _client: &Client) -> RepositoryResult<()> {
            Err(RepositoryError::DatabaseError("disk I/O error".to_string()))
        }
    }

    fn juan() -> Client {
        Client {
            document_type: DocumentType::new("CC").unwrap(),
            document_number: DocumentNumber::new(123).unwrap(),
            first_name: "Juan".to_string(),
            middle_name: "Sebastián".to_string(),
            last_name: "Ramírez".to_string(),
            second_last_name: "Ospina".to_string(),
            phone: "310-5550101".to_string(),
            address: "Calle 80 # 10-5".to_string(),
            city: "Bogotá".to_string(),
        }
    }

    #[test]
    fn returns_stored_client() {
        let repo = InMemoryRepository::with_clients([juan()]);

        let found = get_client(
            &repo,
            &DocumentType::new("CC").unwrap(),
            DocumentNumber::new(123).unwrap(),
        )
        .unwrap();

        assert_eq!(found, Some(juan()));
    }

    #[test]
    fn absent_client_is_none() {
        let repo = InMemoryRepository::with_clients([juan()]);

        let found = get_client(
            &repo,
            &DocumentType::new("CC").unwrap(),
            DocumentNumber::new(999).unwrap(),
        )
        .unwrap();

        assert!(found.is_none());
    }

    #[test]
    fn create_then_get_round_trips() {
        let repo = InMemoryRepository::new();
        let client = juan();

        create_client(&repo, &client).unwrap();
        let found = get_client(&repo, &client.document_type, client.document_number).unwrap();

        assert_eq!(found, Some(client));
    }

    #[test]
    fn lookup_failure_propagates_unchanged() {
        let result = get_client(
            &BrokenRepo,
            &DocumentType::new("CC").unwrap(),
            DocumentNumber::new(123).unwrap(),
        );

        match result {
            Err(ServiceError::Storage(RepositoryError::ConnectionError(message))) => {
                assert_eq!(message, "connection refused");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn insert_failure_propagates_unchanged() {
        let result = create_client(&BrokenRepo, &juan());

        assert!(matches!(
            result,
            Err(ServiceError::Storage(RepositoryError::DatabaseError(_)))
        ));
    }

    #[test]
    fn duplicate_insert_is_a_storage_failure() {
        let repo = InMemoryRepository::with_clients([juan()]);

        let result = create_client(&repo, &juan());

        assert!(matches!(
            result,
            Err(ServiceError::Storage(RepositoryError::ConstraintViolation(_)))
        ));
    }
}

#[cfg(all(test, feature = "test-mocks"))]
mod mock_tests {
    use super::*;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn key() -> (DocumentType, DocumentNumber) {
        (
            DocumentType::new("P").unwrap(),
            DocumentNumber::new(45_000_000).unwrap(),
        )
    }

    /// Verifies the lookup is forwarded exactly once with the same key.
    #[test]
    fn get_client_delegates_to_reader() {
        let (document_type, document_number) = key();
        let mut repo = MockRepository::new();
        repo.expect_get_client_by_document()
            .withf(|document_type, document_number| {
                document_type.as_str() == "P" && document_number.get() == 45_000_000
            })
            .times(1)
            .returning(|_, _| Ok(None));

        let result = get_client(&repo, &document_type, document_number).unwrap();

        assert!(result.is_none());
    }

    /// Ensures reader failures are not retried.
    #[test]
    fn get_client_does_not_retry() {
        let (document_type, document_number) = key();
        let mut repo = MockRepository::new();
        repo.expect_get_client_by_document()
            .times(1)
            .returning(|_, _| Err(RepositoryError::ConnectionError("timeout".to_string())));

        let result = get_client(&repo, &document_type, document_number);

        assert!(matches!(result, Err(ServiceError::Storage(_))));
    }

    /// Verifies inserts are forwarded to the writer.
    #[test]
    fn create_client_delegates_to_writer() {
        let (document_type, document_number) = key();
        let client = Client {
            document_type,
            document_number,
            first_name: "Emma".to_string(),
            middle_name: "Renata".to_string(),
            last_name: "Cano".to_string(),
            second_last_name: "Reyes".to_string(),
            phone: "350-0000000".to_string(),
            address: "Calle 9 # 9-9".to_string(),
            city: "Pereira".to_string(),
        };
        let expected = client.clone();
        let mut repo = MockRepository::new();
        repo.expect_create_client()
            .withf(move |c| c == &expected)
            .times(1)
            .returning(|_| Ok(()));

        create_client(&repo, &client).unwrap();
    }
}
