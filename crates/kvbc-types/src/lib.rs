//! Foundation types for the categorized key-value blockchain (KVBC).
//!
//! Every key written as part of a block belongs to a named category, and each
//! category has one of a fixed set of storage types with distinct persistence
//! and proof semantics. This crate holds the small identity types shared by the
//! write path and the commit engine.
//!
//! # Key Types
//!
//! - [`CategoryId`] — Validated, non-empty category identifier
//! - [`CategoryType`] — Storage type of a category (immutable, versioned, block merkle)
//! - [`Key`] — Opaque key bytes within a category

pub mod category;
pub mod error;

pub use category::{CategoryId, CategoryType, Key};
pub use error::TypeError;
