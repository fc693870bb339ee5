//! In-process implementation of the URL repository.
//!
//! Selected with `DATABASE_URL=memory://`. Contents are lost on restart.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

#[derive(Default)]
struct Tables {
    next_id: i64,
    by_short_url: HashMap<String, UrlRecord>,
    /// original_url -> short_url
    by_original_url: HashMap<String, String>,
}

/// Map-backed repository guarded by a single lock.
#[derive(Default)]
pub struct MemoryUrlRepository {
    tables: RwLock<Tables>,
}

impl MemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        let tables = self.tables.read().await;

        Ok(tables
            .by_original_url
            .get(original_url)
            .and_then(|code| tables.by_short_url.get(code))
            .cloned())
    }

    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<UrlRecord>, AppError> {
        Ok(self.tables.read().await.by_short_url.get(short_url).cloned())
    }

    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let mut tables = self.tables.write().await;

        if let Some(existing) = tables
            .by_original_url
            .get(&new_record.original_url)
            .and_then(|code| tables.by_short_url.get(code))
        {
            return Ok(existing.clone());
        }

        if tables.by_short_url.contains_key(&new_record.short_url) {
            return Err(AppError::conflict(
                "Unique constraint violation: urls_short_url_key",
            ));
        }

        tables.next_id += 1;
        let record = UrlRecord::new(
            tables.next_id,
            new_record.original_url,
            new_record.short_url,
            Utc::now(),
        );

        tables
            .by_original_url
            .insert(record.original_url.clone(), record.short_url.clone());
        tables
            .by_short_url
            .insert(record.short_url.clone(), record.clone());

        Ok(record)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.tables.read().await.by_short_url.len() as i64)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
