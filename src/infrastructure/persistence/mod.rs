//! Concrete entry store implementations.
//!
//! Implementations of the domain's [`crate::domain::repositories::EntryStore`]
//! trait.
//!
//! # Stores
//!
//! - [`JsonFileStore`] - durable single-file JSON store
//! - [`MemoryStore`] - in-memory store for tests and ephemeral use

pub mod json_file_store;
pub mod memory_store;

pub use json_file_store::JsonFileStore;
pub use memory_store::MemoryStore;
