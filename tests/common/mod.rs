#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use linkstash::prelude::*;

pub const BASE_URL: &str = "https://short.local";
pub const ID_LENGTH: usize = 6;
pub const DEFAULT_VALIDITY_MINUTES: i64 = 30;

/// Builds a registry over a JSON file store at `path`.
pub fn file_service(path: &Path) -> LinkService<JsonFileStore> {
    LinkService::new(
        Arc::new(JsonFileStore::new(path)),
        BASE_URL,
        ID_LENGTH,
        DEFAULT_VALIDITY_MINUTES,
    )
}

pub fn store_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("links.json")
}

pub fn make_entry(short_id: &str, long_url: &str, expires_at: i64) -> UrlEntry {
    UrlEntry::new(
        long_url,
        format!("{BASE_URL}/#/{short_id}"),
        short_id,
        expires_at,
    )
}

pub fn live_entry(short_id: &str, long_url: &str) -> UrlEntry {
    make_entry(
        short_id,
        long_url,
        Utc::now().timestamp_millis() + 3_600_000,
    )
}

pub fn expired_entry(short_id: &str, long_url: &str) -> UrlEntry {
    make_entry(
        short_id,
        long_url,
        Utc::now().timestamp_millis() - 3_600_000,
    )
}

/// Seeds the store file at `path` with the given entries.
pub async fn seed_entries(path: &Path, entries: &[UrlEntry]) {
    JsonFileStore::new(path).save_all(entries).await.unwrap();
}

/// A store whose writes always fail, for write-failure safety tests.
///
/// Reads delegate to an in-memory store so the registry sees real data;
/// every `save_all` is rejected as if the backend refused the write.
pub struct FailingStore {
    inner: MemoryStore,
}

impl FailingStore {
    pub fn new(entries: Vec<UrlEntry>) -> Self {
        Self {
            inner: MemoryStore::with_entries(entries),
        }
    }

    /// Returns the entries as the backend still holds them.
    pub async fn snapshot(&self) -> Vec<UrlEntry> {
        self.inner.load_all().await.unwrap()
    }
}

#[async_trait]
impl EntryStore for FailingStore {
    async fn load_all(&self) -> Result<Vec<UrlEntry>, AppError> {
        self.inner.load_all().await
    }

    async fn save_all(&self, _entries: &[UrlEntry]) -> Result<(), AppError> {
        Err(AppError::storage_write_failed("backend rejected the write"))
    }
}
