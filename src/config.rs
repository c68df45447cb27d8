//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any store
//! access happens.
//!
//! ## Variables
//!
//! All variables are optional and fall back to defaults:
//!
//! - `LINKS_FILE` - Path of the JSON store file (default: `links.json`)
//! - `BASE_URL` - Public prefix short links are built from
//!   (default: `https://short.local`)
//! - `ID_LENGTH` - Length of generated identifiers (default: 6, range 1-32)
//! - `DEFAULT_VALIDITY_MINUTES` - Validity applied when a shorten request
//!   carries none (default: 30)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use url::Url;

use crate::utils::id_generator::DEFAULT_ID_LENGTH;

/// Validity in minutes applied when a shorten request carries none.
pub const DEFAULT_VALIDITY_MINUTES: i64 = 30;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON store file.
    pub links_file: PathBuf,
    /// Public prefix short links are built from; the identifier is carried
    /// in the fragment (`<base_url>/#/<id>`), so the prefix itself must not
    /// contain a fragment.
    pub base_url: String,
    /// Length of generated identifiers.
    pub id_length: usize,
    /// Validity applied when a shorten request carries none.
    pub default_validity_minutes: i64,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numeric values fall back to their defaults; validation
    /// of the resulting values happens in [`Self::validate`].
    pub fn from_env() -> Self {
        let links_file = env::var("LINKS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("links.json"));

        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "https://short.local".to_string());

        let id_length = env::var("ID_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_ID_LENGTH);

        let default_validity_minutes = env::var("DEFAULT_VALIDITY_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_VALIDITY_MINUTES);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            links_file,
            base_url,
            id_length,
            default_validity_minutes,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `base_url` is not an absolute URL or carries a fragment
    /// - `id_length` is outside 1-32
    /// - `default_validity_minutes` is not positive
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| anyhow::anyhow!("BASE_URL is not a valid URL: {e}"))?;

        if base.fragment().is_some() {
            anyhow::bail!(
                "BASE_URL must not contain a fragment, got '{}'",
                self.base_url
            );
        }

        if self.id_length == 0 || self.id_length > 32 {
            anyhow::bail!(
                "ID_LENGTH must be between 1 and 32, got {}",
                self.id_length
            );
        }

        if self.default_validity_minutes <= 0 {
            anyhow::bail!(
                "DEFAULT_VALIDITY_MINUTES must be positive, got {}",
                self.default_validity_minutes
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Store file: {}", self.links_file.display());
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Identifier length: {}", self.id_length);
        tracing::info!(
            "  Default validity: {} minutes",
            self.default_validity_minutes
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// Expects environment variables to be already loaded (e.g. via
/// `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
