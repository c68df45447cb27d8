//! In-memory entry store for tests and ephemeral registries.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::entities::UrlEntry;
use crate::domain::repositories::EntryStore;
use crate::error::AppError;

/// An [`EntryStore`] that keeps the entry set in process memory.
///
/// Nothing survives the process; both operations are infallible. Used for
/// test isolation and anywhere a registry is needed without durability.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<Vec<UrlEntry>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given entries.
    pub fn with_entries(entries: Vec<UrlEntry>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait]
impl EntryStore for MemoryStore {
    async fn load_all(&self) -> Result<Vec<UrlEntry>, AppError> {
        Ok(self.entries.read().unwrap().clone())
    }

    async fn save_all(&self, entries: &[UrlEntry]) -> Result<(), AppError> {
        *self.entries.write().unwrap() = entries.to_vec();
        Ok(())
    }
}
