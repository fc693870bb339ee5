//! Validation of submitted URLs, including the DNS check.

use std::sync::Arc;
use url::Host;

use crate::domain::resolver::HostResolver;
use crate::utils::url_validator::{UrlValidationError, check_syntax};

/// Validates submissions before they reach the store.
///
/// Runs the syntactic checks from [`check_syntax`] and then requires the
/// hostname to resolve. IPv4 and bracketed IPv6 literals are accepted
/// without a lookup. Lookup failures are final; there is no retry.
pub struct UrlValidator {
    resolver: Arc<dyn HostResolver>,
}

impl UrlValidator {
    /// Creates a validator backed by the given resolver.
    pub fn new(resolver: Arc<dyn HostResolver>) -> Self {
        Self { resolver }
    }

    /// Returns the URL exactly as submitted when every check passes.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`UrlValidationError`].
    pub async fn validate(&self, input: Option<&str>) -> Result<String, UrlValidationError> {
        let checked = check_syntax(input)?;

        if let Host::Domain(domain) = &checked.host {
            self.resolver.resolve(domain).await.map_err(|e| {
                UrlValidationError::UnresolvableHost {
                    host: e.host,
                    reason: e.reason,
                }
            })?;
        }

        Ok(checked.original_url)
    }
}
