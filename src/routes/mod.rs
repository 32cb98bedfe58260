//! HTTP gateway of the client registry.

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError, web};
use thiserror::Error;

use crate::dto::error::ErrorResponse;
use crate::forms::FormError;
use crate::services::ServiceError;

pub mod client;

/// Failure surfaced by a gateway handler.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Form(#[from] FormError),

    /// Body or query string could not be decoded.
    #[error("{0}")]
    Payload(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Service(ServiceError::InvalidIdNumber)
            | ApiError::Service(ServiceError::NoSearchCriteriaProvided) => StatusCode::BAD_REQUEST,
            ApiError::Service(ServiceError::ClientNotFound) => StatusCode::NOT_FOUND,
            ApiError::Service(ServiceError::DuplicateIdNumber)
            | ApiError::Service(ServiceError::DuplicateMobileNumber) => StatusCode::CONFLICT,
            ApiError::Form(_) | ApiError::Payload(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse::new(status, self.to_string()))
    }
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected JSON payload: {err}");
    ApiError::Payload(err.to_string()).into()
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected query string: {err}");
    ApiError::Payload(err.to_string()).into()
}

/// Registers the client endpoints and extractor error handlers.
///
/// The store must be provided separately as `web::Data<InMemoryRepository>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        // `/clients/search` has to be registered ahead of `/clients/{id_number}`.
        .service(client::search_clients)
        .service(client::add_client)
        .service(client::show_client)
        .service(client::save_client);
}
