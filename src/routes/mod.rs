//! HTTP boundary: route registration and error-to-status mapping.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError, error, web};

use crate::dto::api::ErrorResponse;
use crate::repository::ClientReader;
use crate::services::ServiceError;

pub mod client;

/// Maps a service error kind to the HTTP status reported to the caller.
pub fn status_for(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ServiceError::NotFound => StatusCode::NOT_FOUND,
        ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        status_for(self)
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::Validation(message) => log::warn!("Validation failed: {message}"),
            ServiceError::NotFound => log::info!("Requested client does not exist"),
            err => log::error!("Unexpected application error: {err}"),
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}

/// Turns path deserialization failures (e.g. a non-numeric document number)
/// into validation errors instead of actix's default 404.
pub fn path_error_handler(err: error::PathError, _req: &HttpRequest) -> actix_web::Error {
    ServiceError::Validation(format!("invalid path parameters: {err}")).into()
}

/// Registers the client routes backed by the repository type `R`.
///
/// The repository itself must be provided as `web::Data<R>` app data.
pub fn configure<R>(cfg: &mut web::ServiceConfig)
where
    R: ClientReader + 'static,
{
    cfg.app_data(web::PathConfig::default().error_handler(path_error_handler))
        .route(
            "/clients/{document_type}/{document_number}",
            web::get().to(client::show_client::<R>),
        );
}
