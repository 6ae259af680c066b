use serde::Deserialize;

use crate::domain::types::{DocumentNumber, DocumentType};
use crate::forms::FormError;

#[derive(Debug, Deserialize)]
/// Raw path parameters of `GET /clients/{document_type}/{document_number}`.
pub struct ClientPath {
    pub document_type: String,
    pub document_number: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Validated lookup key extracted from [`ClientPath`].
pub struct ClientLookup {
    pub document_type: DocumentType,
    pub document_number: DocumentNumber,
}

impl TryFrom<ClientPath> for ClientLookup {
    type Error = FormError;

    /// The document type is checked before the number.
    fn try_from(path: ClientPath) -> Result<Self, Self::Error> {
        let document_type =
            DocumentType::new(path.document_type).map_err(|_| FormError::BlankDocumentType)?;
        let document_number = DocumentNumber::new(path.document_number)
            .map_err(|_| FormError::NonPositiveDocumentNumber)?;

        Ok(Self {
            document_type,
            document_number,
        })
    }
}
