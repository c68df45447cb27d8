//! Error taxonomy shared by the entry store and the registry.
//!
//! Validation and collision errors are detected in memory before any storage
//! mutation. Storage errors originate in the [`crate::infrastructure`] layer
//! and propagate unmodified, so a caller can always tell a backend failure
//! apart from a bad request.
//!
//! Resolution outcomes (`NotFound`, `Expired`) are **not** errors; they are
//! variants of [`crate::domain::entities::Resolution`].

use thiserror::Error;

/// All failure modes of the shortening registry and its store.
#[derive(Debug, Error)]
pub enum AppError {
    /// The submitted long URL does not parse as an absolute URL.
    ///
    /// User-correctable; nothing was written.
    #[error("invalid URL: {reason}")]
    InvalidUrl { reason: String },

    /// A caller-supplied identifier is already mapped to another URL.
    ///
    /// User-correctable; nothing was written.
    #[error("short identifier '{id}' is already taken")]
    IdentifierTaken { id: String },

    /// Random identifier generation kept colliding with stored entries.
    ///
    /// Systemic; retry, or configure a longer identifier.
    #[error("could not find a free identifier after {attempts} attempts")]
    IdentifierSpaceExhausted { attempts: u32 },

    /// The backing store cannot be read or its contents cannot be parsed.
    ///
    /// Never reported as an empty store: "no entries" and "unreadable
    /// entries" are distinct conditions.
    #[error("storage unavailable: {reason}")]
    StorageUnavailable { reason: String },

    /// The backing store rejected a write.
    ///
    /// The previously persisted data is left unchanged.
    #[error("storage write failed: {reason}")]
    StorageWriteFailed { reason: String },
}

impl AppError {
    pub fn invalid_url(reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            reason: reason.into(),
        }
    }

    pub fn identifier_taken(id: impl Into<String>) -> Self {
        Self::IdentifierTaken { id: id.into() }
    }

    pub fn storage_unavailable(reason: impl Into<String>) -> Self {
        Self::StorageUnavailable {
            reason: reason.into(),
        }
    }

    pub fn storage_write_failed(reason: impl Into<String>) -> Self {
        Self::StorageWriteFailed {
            reason: reason.into(),
        }
    }

    /// Returns true for backend failures that are not user-correctable.
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            Self::StorageUnavailable { .. } | Self::StorageWriteFailed { .. }
        )
    }
}
