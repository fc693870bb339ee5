//! Handler for the shortening endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorturl::{ShortUrlRequest, ShortUrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Validates a submitted URL and returns its short code.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// JSON `{ "url": "https://www.example.com" }` or the form
/// `url=https%3A%2F%2Fwww.example.com`.
///
/// # Response
///
/// ```json
/// { "original_url": "https://www.example.com", "short_url": "q1W2e3R4" }
/// ```
///
/// Submitting the same URL again returns the same `short_url`.
///
/// # Errors
///
/// Any validation failure, including a hostname that does not resolve,
/// returns `200 OK` with `{ "error": "invalid url" }`. Storage failures
/// return `500`.
pub async fn create_short_url_handler(
    State(state): State<AppState>,
    request: ShortUrlRequest,
) -> Result<Json<ShortUrlResponse>, AppError> {
    let original_url = state.url_validator.validate(request.url_text()).await?;

    let record = state.url_service.shorten(&original_url).await?;

    Ok(Json(record.into()))
}
