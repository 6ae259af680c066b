use serde::{Deserialize, Serialize};

use crate::domain::types::{DocumentNumber, DocumentType};

/// Customer record keyed by `(document_type, document_number)`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Client {
    pub document_type: DocumentType,
    pub document_number: DocumentNumber,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub second_last_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
}
