//! Repository trait for short URL data access.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the URL store.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - In-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Finds the record for an original URL, compared byte for byte.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError>;

    /// Finds the record for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Inserts a record, or returns the existing one for the same original URL.
    ///
    /// The check and the write happen atomically, so concurrent inserts of
    /// the same original URL all observe a single record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code is already taken by
    /// a different original URL.
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Counts stored records.
    async fn count(&self) -> Result<i64, AppError>;

    /// Verifies the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;

    /// Releases the underlying resources. Called once on shutdown.
    async fn close(&self) {}
}
