//! Hostname resolution through the operating system resolver.

use async_trait::async_trait;
use std::net::IpAddr;

use crate::domain::resolver::{HostResolver, ResolveError};

/// Resolves names with `getaddrinfo` semantics, including `/etc/hosts`.
///
/// Each call performs a fresh lookup; nothing is cached.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl SystemResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostResolver for SystemResolver {
    async fn resolve(&self, domain: &str) -> Result<Vec<IpAddr>, ResolveError> {
        let addrs: Vec<IpAddr> = tokio::net::lookup_host((domain, 0))
            .await
            .map_err(|e| ResolveError::new(domain, e))?
            .map(|addr| addr.ip())
            .collect();

        if addrs.is_empty() {
            return Err(ResolveError::new(domain, "no addresses returned"));
        }

        Ok(addrs)
    }
}
