//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`UrlEntry`] - A shortened URL mapping with an expiry instant
//! - [`Resolution`] - Outcome of resolving a short identifier

pub mod entry;

pub use entry::{Resolution, UrlEntry};
