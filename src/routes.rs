//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`          - Landing page (`views/index.html`)
//! - `GET  /health`    - Health check
//! - `/api/*`          - Shortening API, see [`crate::api::routes`]
//! - `GET  /public/*`  - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin may call the API
//! - **Path normalization** - Trailing slash handling

use std::path::PathBuf;

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::config::Config;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, get_service};
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Locations of the static files served next to the API.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    pub public_dir: PathBuf,
    pub index_page: PathBuf,
}

impl StaticFiles {
    pub fn from_config(config: &Config) -> Self {
        Self {
            public_dir: PathBuf::from(&config.public_dir),
            index_page: PathBuf::from(&config.views_dir).join("index.html"),
        }
    }
}

impl Default for StaticFiles {
    fn default() -> Self {
        Self {
            public_dir: PathBuf::from("public"),
            index_page: PathBuf::from("views/index.html"),
        }
    }
}

/// Builds the router with all routes and middleware, without path normalization.
pub fn router(state: AppState, files: &StaticFiles) -> Router {
    Router::new()
        .route("/", get_service(ServeFile::new(&files.index_page)))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .nest_service("/public", ServeDir::new(&files.public_dir))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(tracing::layer())
}

/// Constructs the application router; trailing slashes are trimmed before routing.
pub fn app_router(state: AppState, files: &StaticFiles) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, files))
}
