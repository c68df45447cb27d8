//! # linkstash
//!
//! A local-first URL shortener with expiring links over a durable JSON store.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and the store trait
//! - **Application Layer** ([`application`]) - The registry: identifier
//!   minting, duplicate detection, expiry, resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON file and in-memory
//!   store implementations
//!
//! The CLI in `main.rs` is a thin collaborator over the library; every
//! invariant lives below it.
//!
//! ## Semantics
//!
//! - Shortening the same URL twice returns the same entry (idempotent).
//! - Identifiers are unique across live *and* expired entries; expired
//!   entries stay stored until an explicit sweep.
//! - Expiry is checked lazily on every resolution; there is no background
//!   scheduler.
//! - Short links carry the identifier in the URL fragment:
//!   `<base>/#/<id>`.
//!
//! ## Quick Start
//!
//! ```bash
//! # Shorten with a generated identifier, valid 30 minutes
//! linkstash shorten https://example.com/some/very/long/path
//!
//! # Custom identifier, valid for a day
//! linkstash shorten https://example.com --id launch --validity 1440
//!
//! # Resolve an identifier or a full short link
//! linkstash resolve launch
//! linkstash resolve 'https://short.local/#/launch'
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`]. See [`config`]
//! for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Resolution, UrlEntry};
    pub use crate::domain::repositories::EntryStore;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{JsonFileStore, MemoryStore};
}
