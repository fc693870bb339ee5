//! API route configuration.

use crate::api::handlers::{create_short_url_handler, hello_handler, redirect_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorturl`              - Shorten a URL (form or JSON body)
/// - `GET  /shorturl/{short_url}`  - Redirect to the original URL
/// - `GET  /hello`                 - Liveness greeting
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorturl", post(create_short_url_handler))
        .route("/shorturl/{short_url}", get(redirect_handler))
        .route("/hello", get(hello_handler))
}
