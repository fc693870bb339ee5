//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{UrlService, UrlValidator};
use crate::domain::repositories::UrlRepository;
use crate::domain::resolver::HostResolver;

/// Handles shared by every request.
///
/// Built once at startup by [`crate::server::run`]; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
    pub url_validator: Arc<UrlValidator>,
}

impl AppState {
    /// Wires services on top of a store and a resolver.
    pub fn new(repository: Arc<dyn UrlRepository>, resolver: Arc<dyn HostResolver>) -> Self {
        Self {
            url_service: Arc::new(UrlService::new(repository)),
            url_validator: Arc::new(UrlValidator::new(resolver)),
        }
    }
}
