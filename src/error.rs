//! Application error type and its HTTP representation.
//!
//! Every error leaves the service as a flat JSON body of the form
//! `{ "error": "<message>" }`. Validation failures are reported with
//! `200 OK`; clients of the original API tell success from failure by the
//! shape of the payload, not the status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::utils::url_validator::UrlValidationError;

/// Message returned for any rejected submission.
pub const INVALID_URL_MESSAGE: &str = "invalid url";

/// Message returned when a short code has no record.
pub const NOT_FOUND_MESSAGE: &str = "No short URL found for the given input";

const INTERNAL_MESSAGE: &str = "internal server error";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The submitted URL failed validation.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] UrlValidationError),

    /// No record exists for the requested short code.
    #[error("short url not found: {short_url}")]
    NotFound { short_url: String },

    /// A uniqueness constraint was violated inside the store.
    #[error("{message}")]
    Conflict { message: String },

    /// Persistence or runtime failure.
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn not_found(short_url: impl Into<String>) -> Self {
        Self::NotFound {
            short_url: short_url.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidUrl(reason) => {
                tracing::debug!("Rejected submission: {}", reason);
                (StatusCode::OK, INVALID_URL_MESSAGE.to_string())
            }
            AppError::NotFound { short_url } => {
                tracing::debug!("No record for short url {}", short_url);
                (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_string())
            }
            AppError::Conflict { message } => (StatusCode::CONFLICT, message.clone()),
            AppError::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

/// Converts a database error, keeping unique violations distinguishable.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return AppError::conflict(format!(
            "Unique constraint violation: {}",
            db.constraint().unwrap_or("unknown")
        ));
    }

    AppError::internal(format!("Database error: {}", e))
}
