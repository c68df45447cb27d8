//! Store trait definitions for the domain layer.
//!
//! The trait here abstracts data access following the Repository pattern and
//! is implemented by concrete stores in `crate::infrastructure::persistence`.
//! Mock implementations are auto-generated via `mockall` for testing.

pub mod entry_store;

pub use entry_store::EntryStore;

#[cfg(test)]
pub use entry_store::MockEntryStore;
