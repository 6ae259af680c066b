use actix_web::{HttpResponse, web};

use crate::forms::client::{ClientLookup, ClientPath};
use crate::repository::ClientReader;
use crate::services::client as client_service;
use crate::services::ServiceError;

/// `GET /clients/{document_type}/{document_number}`
///
/// Invalid keys are rejected before the repository is touched.
pub async fn show_client<R>(
    path: web::Path<ClientPath>,
    repo: web::Data<R>,
) -> Result<HttpResponse, ServiceError>
where
    R: ClientReader + 'static,
{
    let lookup = ClientLookup::try_from(path.into_inner())?;

    match client_service::get_client(
        repo.get_ref(),
        &lookup.document_type,
        lookup.document_number,
    )? {
        Some(client) => Ok(HttpResponse::Ok().json(client)),
        None => Err(ServiceError::NotFound),
    }
}
