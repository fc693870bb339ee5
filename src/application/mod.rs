//! Application layer services implementing business logic.
//!
//! Services consume the domain traits and provide a small API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Insert-or-get and lookup of short URLs
//! - [`services::url_validator::UrlValidator`] - Submission checks including DNS

pub mod services;
