//! Syntactic checks for submitted URLs.
//!
//! Covers everything the validator does before touching the network. The
//! DNS step lives in [`crate::application::services::UrlValidator`].

use regex::Regex;
use std::sync::LazyLock;
use url::{Host, Url};

/// Submissions must start with one of the two web schemes, lowercase.
static SCHEME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://").unwrap());

/// Reasons a submission is rejected.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("input is missing or not a string")]
    NotAString,

    #[error("input is empty")]
    Empty,

    #[error("malformed URL: {0}")]
    Malformed(String),

    #[error("only http:// and https:// URLs are accepted")]
    UnsupportedScheme,

    #[error("URL has no host")]
    MissingHost,

    #[error("host {host} could not be resolved: {reason}")]
    UnresolvableHost { host: String, reason: String },
}

/// A submission that passed the syntactic checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedUrl {
    /// The input exactly as submitted.
    pub original_url: String,
    pub host: Host<String>,
}

/// Runs the syntactic checks in order: presence, emptiness, parse, scheme, host.
///
/// The scheme test runs on the raw input, so `HTTP://example.com` is rejected
/// even though it parses.
pub fn check_syntax(input: Option<&str>) -> Result<CheckedUrl, UrlValidationError> {
    let input = input.ok_or(UrlValidationError::NotAString)?;

    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    // The URL parser tolerates NUL, but the stored text cannot hold it.
    if input.contains('\0') {
        return Err(UrlValidationError::Malformed(
            "URL contains a NUL character".to_string(),
        ));
    }

    let parsed = Url::parse(input).map_err(|e| UrlValidationError::Malformed(e.to_string()))?;

    if !SCHEME_REGEX.is_match(input) {
        return Err(UrlValidationError::UnsupportedScheme);
    }

    let host = parsed
        .host()
        .map(|h| h.to_owned())
        .ok_or(UrlValidationError::MissingHost)?;

    Ok(CheckedUrl {
        original_url: input.to_string(),
        host,
    })
}
