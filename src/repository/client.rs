use diesel::prelude::*;

use crate::domain::client::Client;
use crate::domain::types::{DocumentNumber, DocumentType};
use crate::models::client::{Client as DbClient, NewClient as DbNewClient};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ClientReader, ClientWriter, DieselRepository};
use crate::schema::clients;

impl ClientReader for DieselRepository {
    fn get_client_by_document(
        &self,
        document_type: &DocumentType,
        document_number: DocumentNumber,
    ) -> RepositoryResult<Option<Client>> {
        let mut conn = self.conn()?;

        let client = clients::table
            .filter(clients::document_type.eq(document_type.as_str()))
            .filter(clients::document_number.eq(document_number.get()))
            .select(DbClient::as_select())
            .first::<DbClient>(&mut conn)
            .optional()?;

        client
            .map(Client::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }
}

impl ClientWriter for DieselRepository {
    fn create_client(&self, client: &Client) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        let insertable = DbNewClient::from(client);
        diesel::insert_into(clients::table)
            .values(&insertable)
            .execute(&mut conn)?;

        Ok(())
    }
}
