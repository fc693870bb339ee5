#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use shorturl::domain::entities::{NewUrlRecord, UrlRecord};
use shorturl::domain::repositories::UrlRepository;
use shorturl::domain::resolver::{HostResolver, ResolveError};
use shorturl::error::AppError;
use shorturl::infrastructure::persistence::MemoryUrlRepository;
use shorturl::routes::{StaticFiles, router};
use shorturl::state::AppState;
use std::collections::HashSet;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

/// Hosts the test resolver knows about; everything else fails to resolve.
pub const KNOWN_HOSTS: &[&str] = &["www.example.com", "example.com", "rust-lang.org"];

/// Resolver answering from a fixed host list, so tests never touch the network.
pub struct StaticResolver {
    hosts: HashSet<String>,
}

impl StaticResolver {
    pub fn new(hosts: &[&str]) -> Self {
        Self {
            hosts: hosts.iter().map(|h| h.to_string()).collect(),
        }
    }
}

#[async_trait]
impl HostResolver for StaticResolver {
    async fn resolve(&self, domain: &str) -> Result<Vec<IpAddr>, ResolveError> {
        if self.hosts.contains(domain) {
            Ok(vec![IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1))])
        } else {
            Err(ResolveError::new(domain, "NXDOMAIN"))
        }
    }
}

/// Store whose every call fails, standing in for a lost database connection.
pub struct FailingRepository;

#[async_trait]
impl UrlRepository for FailingRepository {
    async fn find_by_original_url(&self, _: &str) -> Result<Option<UrlRecord>, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn find_by_short_url(&self, _: &str) -> Result<Option<UrlRecord>, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn insert(&self, _: NewUrlRecord) -> Result<UrlRecord, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::internal("connection refused"))
    }
}

pub fn create_test_state_with(repository: Arc<dyn UrlRepository>) -> AppState {
    AppState::new(repository, Arc::new(StaticResolver::new(KNOWN_HOSTS)))
}

pub fn create_test_state() -> (AppState, Arc<MemoryUrlRepository>) {
    let repository = Arc::new(MemoryUrlRepository::new());
    (create_test_state_with(repository.clone()), repository)
}

pub fn create_test_app(state: AppState) -> Router {
    router(state, &StaticFiles::default())
}

pub fn create_test_server() -> (TestServer, Arc<MemoryUrlRepository>) {
    let (state, repository) = create_test_state();
    let server = TestServer::new(create_test_app(state)).unwrap();
    (server, repository)
}
