//! Hostname resolution contract used by URL validation.

use async_trait::async_trait;
use std::net::IpAddr;

/// Error returned when a hostname cannot be resolved.
#[derive(Debug, Clone, thiserror::Error)]
#[error("failed to resolve {host}: {reason}")]
pub struct ResolveError {
    pub host: String,
    pub reason: String,
}

impl ResolveError {
    pub fn new(host: impl Into<String>, reason: impl ToString) -> Self {
        Self {
            host: host.into(),
            reason: reason.to_string(),
        }
    }
}

/// Resolves a domain name to its addresses.
///
/// A successful lookup always returns at least one address.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    async fn resolve(&self, domain: &str) -> Result<Vec<IpAddr>, ResolveError>;
}
