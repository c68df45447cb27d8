//! Short identifier generation and custom identifier handling.

use rand::Rng;

/// Default length of generated identifiers.
pub const DEFAULT_ID_LENGTH: usize = 6;

/// Generates a random fixed-length short identifier.
///
/// Identifiers are case-sensitive and drawn from the URL-safe alphanumeric
/// alphabet (`A-Z`, `a-z`, `0-9`). The entropy source is not
/// cryptographically critical: collisions are checked explicitly against the
/// stored entries before an identifier is accepted.
///
/// # Examples
///
/// ```
/// use linkstash::utils::id_generator::generate_short_id;
///
/// let id = generate_short_id(6);
/// assert_eq!(id.len(), 6);
/// assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_short_id(length: usize) -> String {
    rand::rng()
        .sample_iter(rand::distr::Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Returns the trimmed caller-supplied identifier, or `None` when it is
/// empty or whitespace-only (meaning a random identifier should be minted).
pub fn normalize_custom_id(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
