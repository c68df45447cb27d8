//! URL entry entity representing a shortened link mapping.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A single persisted mapping from a short identifier to a long URL.
///
/// Entries are created exactly once and never mutated afterwards. An entry
/// becomes logically dead once the clock passes `expires_at`, but it stays in
/// the store until an explicit sweep removes it, so identifier uniqueness
/// checks must consider expired entries too.
///
/// Serializes with camelCase keys to match the persisted record layout:
/// `{"longUrl": …, "shortUrl": …, "shortId": …, "expiresAt": …}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlEntry {
    /// Canonical target address (absolute URL, stored exactly as submitted).
    pub long_url: String,
    /// Fully-qualified short link, `<base>/#/<short_id>`.
    pub short_url: String,
    /// Unique key within the store.
    pub short_id: String,
    /// Absolute expiry instant, epoch milliseconds.
    pub expires_at: i64,
}

impl UrlEntry {
    /// Creates a new entry.
    pub fn new(
        long_url: impl Into<String>,
        short_url: impl Into<String>,
        short_id: impl Into<String>,
        expires_at: i64,
    ) -> Self {
        Self {
            long_url: long_url.into(),
            short_url: short_url.into(),
            short_id: short_id.into(),
            expires_at,
        }
    }

    /// Returns true if the entry is dead at the given instant.
    ///
    /// An entry is live while `now <= expires_at`; the transition is
    /// one-directional, there is no resurrection.
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms > self.expires_at
    }

    /// Returns true if the entry has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp_millis())
    }
}

/// Outcome of looking up a short identifier.
///
/// `NotFound` and `Expired` are ordinary control flow, not errors: a caller
/// must handle them differently (unknown link vs dead link).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The identifier maps to a live entry; redirect to this URL.
    Redirect(String),
    /// No entry carries this identifier.
    NotFound,
    /// An entry exists but its expiry instant has passed. It remains stored.
    Expired,
}
