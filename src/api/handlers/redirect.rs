//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{short_url}`
///
/// Responds with `302 Found` and the stored URL in `Location`. A URL that
/// is not a valid header value as stored (non-ASCII characters, for
/// instance) is sent in its percent-encoded form.
///
/// # Errors
///
/// Returns 404 Not Found with
/// `{ "error": "No short URL found for the given input" }` if the code is unknown.
pub async fn redirect_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let record = state.url_service.resolve(&short_url).await?;

    let location = location_header(&record.original_url)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}

fn location_header(original_url: &str) -> Result<HeaderValue, AppError> {
    if let Ok(value) = HeaderValue::from_str(original_url) {
        return Ok(value);
    }

    let encoded = Url::parse(original_url)
        .map_err(|e| AppError::internal(format!("Stored URL is not parseable: {}", e)))?;

    HeaderValue::from_str(encoded.as_str())
        .map_err(|e| AppError::internal(format!("Stored URL is not a valid header: {}", e)))
}
