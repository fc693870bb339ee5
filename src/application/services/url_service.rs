//! Short URL creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Attempts at finding a free short code before giving up.
const MAX_CODE_ATTEMPTS: usize = 10;

/// Service for creating and resolving short URLs.
///
/// Expects already validated input; see
/// [`crate::application::services::UrlValidator`].
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
}

impl UrlService {
    /// Creates a new URL service.
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self { repository }
    }

    /// Returns the record for `original_url`, creating it on first submission.
    ///
    /// # Deduplication
    ///
    /// An existing record is returned unchanged. The repository insert is an
    /// upsert on the original URL, so two concurrent first submissions still
    /// end up with one record.
    ///
    /// # Code Generation
    ///
    /// A random code is generated per attempt. If it is already taken the
    /// insert conflicts and a new code is tried, up to 10 times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors or when no free code
    /// was found.
    pub async fn shorten(&self, original_url: &str) -> Result<UrlRecord, AppError> {
        if let Some(existing) = self
            .repository
            .find_by_original_url(original_url)
            .await?
        {
            tracing::debug!(short_url = %existing.short_url, "Reusing existing short url");
            return Ok(existing);
        }

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let short_url = generate_code()
                .map_err(|e| AppError::internal(format!("Random generator failed: {}", e)))?;

            let new_record = NewUrlRecord {
                original_url: original_url.to_string(),
                short_url,
            };

            match self.repository.insert(new_record).await {
                Ok(record) => {
                    tracing::info!(
                        short_url = %record.short_url,
                        original_url = %record.original_url,
                        "Short url created"
                    );
                    return Ok(record);
                }
                Err(AppError::Conflict { message }) => {
                    tracing::warn!(attempt, "Short code collision: {}", message);
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(format!(
            "Failed to generate a unique short code after {} attempts",
            MAX_CODE_ATTEMPTS
        )))
    }

    /// Looks up the record for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve(&self, short_url: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .find_by_short_url(short_url)
            .await?
            .ok_or_else(|| AppError::not_found(short_url))
    }

    /// Counts stored records.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Checks that the store is reachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    /// Releases the store. Called once after the server stops.
    pub async fn shutdown(&self) {
        self.repository.close().await;
    }
}
