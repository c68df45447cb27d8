//! Durable entry store backed by a single JSON file.

use std::fs;
use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::entities::UrlEntry;
use crate::domain::repositories::EntryStore;
use crate::error::AppError;

/// File-backed [`EntryStore`] holding the full entry set as one JSON array.
///
/// The whole file is read on every load and replaced on every save. Saves
/// write to a sibling temp file first and rename it over the target, so a
/// rejected write (full disk, permissions) leaves the previous contents
/// intact.
///
/// IO is plain synchronous `std::fs`: the file is small and local, and every
/// call either completes promptly or fails fast.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store over the given file path.
    ///
    /// The file does not have to exist yet; a missing file reads as an empty
    /// store and is created by the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl EntryStore for JsonFileStore {
    async fn load_all(&self) -> Result<Vec<UrlEntry>, AppError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            // Nothing persisted yet: an empty store, not a failure.
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(AppError::storage_unavailable(format!(
                    "cannot read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        let entries: Vec<UrlEntry> = serde_json::from_str(&content).map_err(|e| {
            AppError::storage_unavailable(format!(
                "cannot parse {}: {}",
                self.path.display(),
                e
            ))
        })?;

        debug!("loaded {} entries from {}", entries.len(), self.path.display());
        Ok(entries)
    }

    async fn save_all(&self, entries: &[UrlEntry]) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| AppError::storage_write_failed(format!("cannot serialize entries: {e}")))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::storage_write_failed(format!(
                    "cannot create {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let temp = self.temp_path();
        fs::write(&temp, json).map_err(|e| {
            AppError::storage_write_failed(format!("cannot write {}: {}", temp.display(), e))
        })?;

        if let Err(e) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(AppError::storage_write_failed(format!(
                "cannot replace {}: {}",
                self.path.display(),
                e
            )));
        }

        info!("saved {} entries to {}", entries.len(), self.path.display());
        Ok(())
    }
}
