//! Link creation and resolution service.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};
use url::Url;

use crate::domain::entities::{Resolution, UrlEntry};
use crate::domain::repositories::EntryStore;
use crate::error::AppError;
use crate::utils::id_generator::{generate_short_id, normalize_custom_id};

/// Attempt cap for random identifier generation before giving up.
const MAX_ID_ATTEMPTS: u32 = 10;

/// The short-link registry: mints identifiers and resolves them until expiry.
///
/// All business rules live here; the injected [`EntryStore`] is a thin
/// durability boundary. Every operation is one read-snapshot-then-write
/// sequence: uniqueness and duplicate checks run against an in-memory
/// snapshot, followed by at most one atomic `save_all`.
pub struct LinkService<S: EntryStore> {
    store: Arc<S>,
    base_url: String,
    id_length: usize,
    default_validity_minutes: i64,
}

impl<S: EntryStore> LinkService<S> {
    /// Creates a new registry over the given store.
    ///
    /// `base_url` is the public prefix short links are built from; a
    /// trailing slash is tolerated and stripped.
    pub fn new(
        store: Arc<S>,
        base_url: impl Into<String>,
        id_length: usize,
        default_validity_minutes: i64,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            store,
            base_url,
            id_length,
            default_validity_minutes,
        }
    }

    /// Creates a short link for `long_url`, or returns the existing one.
    ///
    /// # Deduplication
    ///
    /// If an entry for the exact same URL string already exists, that entry
    /// is returned as-is and nothing is written. The comparison is exact by
    /// design; no normalization is applied.
    ///
    /// # Identifier Choice
    ///
    /// - A non-empty `custom_id` is trimmed and used, or rejected with
    ///   [`AppError::IdentifierTaken`] if another entry already carries it.
    /// - Otherwise a random identifier is generated, retrying a bounded
    ///   number of times on collision.
    ///
    /// # Validity
    ///
    /// `validity_minutes` must be positive to take effect; zero, negative,
    /// or absent values fall back to the configured default.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if `long_url` is not an absolute
    /// URL, [`AppError::IdentifierTaken`] / [`AppError::IdentifierSpaceExhausted`]
    /// on collision failures, and propagates storage errors unmodified. On
    /// any error the store is left unchanged.
    pub async fn shorten(
        &self,
        long_url: &str,
        custom_id: Option<&str>,
        validity_minutes: Option<i64>,
    ) -> Result<UrlEntry, AppError> {
        Url::parse(long_url).map_err(|e| AppError::invalid_url(e.to_string()))?;

        let entries = self.store.load_all().await?;

        if let Some(existing) = entries.iter().find(|e| e.long_url == long_url) {
            debug!(
                "URL already shortened as '{}', returning existing entry",
                existing.short_id
            );
            return Ok(existing.clone());
        }

        let short_id = match custom_id.and_then(normalize_custom_id) {
            Some(custom) => {
                if entries.iter().any(|e| e.short_id == custom) {
                    return Err(AppError::identifier_taken(custom));
                }
                custom
            }
            None => self.generate_unique_id(&entries)?,
        };

        let validity = validity_minutes
            .filter(|v| *v > 0)
            .unwrap_or(self.default_validity_minutes);

        let now_ms = Utc::now().timestamp_millis();
        let entry = UrlEntry::new(
            long_url,
            self.short_url_for(&short_id),
            short_id,
            now_ms + validity * 60_000,
        );

        let mut updated = entries;
        updated.push(entry.clone());

        // No success without a durable write.
        self.store.save_all(&updated).await?;

        info!(
            "created short link '{}' -> {}",
            entry.short_id, entry.long_url
        );
        Ok(entry)
    }

    /// Resolves a short identifier to its redirect target.
    ///
    /// Expiry is checked on every lookup; an expired entry stays in storage
    /// (removal is a separate maintenance concern, see
    /// [`Self::sweep_expired`]).
    ///
    /// # Errors
    ///
    /// Only storage failures are errors; `NotFound` and `Expired` are
    /// ordinary [`Resolution`] outcomes.
    pub async fn resolve(&self, short_id: &str) -> Result<Resolution, AppError> {
        let entries = self.store.load_all().await?;

        let Some(entry) = entries.iter().find(|e| e.short_id == short_id) else {
            return Ok(Resolution::NotFound);
        };

        if entry.is_expired_at(Utc::now().timestamp_millis()) {
            debug!("short link '{}' has expired", short_id);
            return Ok(Resolution::Expired);
        }

        Ok(Resolution::Redirect(entry.long_url.clone()))
    }

    /// Returns the current entry set, live and expired alike.
    pub async fn list(&self) -> Result<Vec<UrlEntry>, AppError> {
        self.store.load_all().await
    }

    /// Removes expired entries in one load/save cycle.
    ///
    /// Returns the number of entries removed; writes nothing when no entry
    /// has expired. Resolution correctness never depends on this having run.
    pub async fn sweep_expired(&self) -> Result<usize, AppError> {
        let entries = self.store.load_all().await?;
        let now_ms = Utc::now().timestamp_millis();

        let live: Vec<UrlEntry> = entries
            .iter()
            .filter(|e| !e.is_expired_at(now_ms))
            .cloned()
            .collect();
        let removed = entries.len() - live.len();

        if removed > 0 {
            self.store.save_all(&live).await?;
            info!("swept {} expired short links", removed);
        }

        Ok(removed)
    }

    /// Generates an identifier not present in the snapshot, with bounded retry.
    fn generate_unique_id(&self, entries: &[UrlEntry]) -> Result<String, AppError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = generate_short_id(self.id_length);

            if !entries.iter().any(|e| e.short_id == id) {
                return Ok(id);
            }

            warn!("identifier collision, regenerating");
        }

        Err(AppError::IdentifierSpaceExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    fn short_url_for(&self, short_id: &str) -> String {
        format!("{}/#/{}", self.base_url, short_id)
    }
}
