//! Infrastructure layer for persistence.
//!
//! Implements the interfaces defined by the domain layer against concrete
//! backing media.
//!
//! # Modules
//!
//! - [`persistence`] - entry store implementations

pub mod persistence;
