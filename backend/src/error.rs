//! # API Errors
//!
//! Every handler returns `Result<HttpResponse, ApiError>`. The error variant
//! decides the HTTP status and the JSON body:
//!
//! - `NotFound` -> `404 {"detail": "Not found."}`
//! - `Validation` -> `400` with the per-field messages as body
//! - `BadRequest` -> `400 {"detail": ...}` (malformed JSON)
//! - `UnsupportedMediaType` -> `415 {"detail": ...}`
//! - `MethodNotAllowed` -> `405 {"detail": ...}`
//! - anything coming from the database layer -> `500`, logged, with a generic detail

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use common::validation::FieldErrors;
use log::error;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found.")]
    NotFound,

    #[error("invalid payload: {0:?}")]
    Validation(FieldErrors),

    #[error("{0}")]
    BadRequest(String),

    #[error("Unsupported media type in request.")]
    UnsupportedMediaType,

    #[error("Method \"{0}\" not allowed.")]
    MethodNotAllowed(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("database connection lock is poisoned")]
    ConnectionPoisoned,

    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Database(_) | ApiError::ConnectionPoisoned | ApiError::Join(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        match self {
            ApiError::Validation(fields) => response.json(fields),
            ApiError::Database(_) | ApiError::ConnectionPoisoned | ApiError::Join(_) => {
                error!("{}", self);
                response.json(json!({ "detail": "A server error occurred." }))
            }
            _ => response.json(json!({ "detail": self.to_string() })),
        }
    }
}

impl From<JsonPayloadError> for ApiError {
    fn from(err: JsonPayloadError) -> Self {
        match err {
            JsonPayloadError::ContentType => ApiError::UnsupportedMediaType,
            other => ApiError::BadRequest(format!("JSON parse error - {}", other)),
        }
    }
}

/// Error handler for `web::JsonConfig`.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::from(err).into()
}

/// Error handler for `web::PathConfig`: an id that is not an integer matches no record.
pub fn path_error_handler(_err: PathError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::NotFound.into()
}
