//! Store trait for durable URL entry persistence.

use crate::domain::entities::UrlEntry;
use crate::error::AppError;
use async_trait::async_trait;

/// Durability boundary for the full set of [`UrlEntry`] records.
///
/// The store is deliberately thin: whole-set load and whole-set atomic
/// replace, no business logic. All multi-step invariants (identifier
/// uniqueness, duplicate-URL detection) are enforced by the registry over an
/// in-memory snapshot before a single `save_all`, which matches a backend
/// with no per-key transactional update.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonFileStore`] - durable JSON file
/// - [`crate::infrastructure::persistence::MemoryStore`] - in-memory, for
///   tests and ephemeral registries
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Returns every persisted entry.
    ///
    /// A store with no backing data yet yields an empty vector. Unreadable
    /// or corrupt backing data is an error, never an empty result.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] if the backend cannot be
    /// read or parsed.
    async fn load_all(&self) -> Result<Vec<UrlEntry>, AppError>;

    /// Atomically replaces the full persisted set.
    ///
    /// All-or-nothing: a failed write leaves the previously persisted data
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageWriteFailed`] if the backend rejects the
    /// write.
    async fn save_all(&self, entries: &[UrlEntry]) -> Result<(), AppError>;
}
