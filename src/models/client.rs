use diesel::prelude::*;

use crate::domain::client::Client as DomainClient;
use crate::domain::types::{DocumentNumber, DocumentType, TypeConstraintError};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::clients)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::client::Client`].
pub struct Client {
    pub document_type: String,
    pub document_number: i64,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub second_last_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clients)]
/// Insertable form of [`Client`].
pub struct NewClient<'a> {
    pub document_type: &'a str,
    pub document_number: i64,
    pub first_name: &'a str,
    pub middle_name: &'a str,
    pub last_name: &'a str,
    pub second_last_name: &'a str,
    pub phone: &'a str,
    pub address: &'a str,
    pub city: &'a str,
}

impl TryFrom<Client> for DomainClient {
    type Error = TypeConstraintError;

    fn try_from(client: Client) -> Result<Self, Self::Error> {
        Ok(Self {
            document_type: DocumentType::new(client.document_type)?,
            document_number: DocumentNumber::new(client.document_number)?,
            first_name: client.first_name,
            middle_name: client.middle_name,
            last_name: client.last_name,
            second_last_name: client.second_last_name,
            phone: client.phone,
            address: client.address,
            city: client.city,
        })
    }
}

impl<'a> From<&'a DomainClient> for NewClient<'a> {
    fn from(client: &'a DomainClient) -> Self {
        Self {
            document_type: client.document_type.as_str(),
            document_number: client.document_number.get(),
            first_name: client.first_name.as_str(),
            middle_name: client.middle_name.as_str(),
            last_name: client.last_name.as_str(),
            second_last_name: client.second_last_name.as_str(),
            phone: client.phone.as_str(),
            address: client.address.as_str(),
            city: client.city.as_str(),
        }
    }
}
