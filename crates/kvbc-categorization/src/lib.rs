//! Categorized key-value updates for KVBC blocks.
//!
//! Every block carries one batch of writes, partitioned by category. Each
//! category type supports different properties:
//!
//! - [`ImmutableUpdates`] -- single-version, optionally tagged key-values.
//!   Explicit deletes are not supported. Can request a root hash per tag.
//! - [`VersionedUpdates`] -- key-values versioned by block, with an optional
//!   stale-on-update flag and explicit deletes. Can request a root hash.
//! - [`BlockMerkleUpdates`] -- key-values committed into a merkle tree, with
//!   explicit deletes.
//!
//! Builders are populated independently and then moved into [`Updates`],
//! which enforces that each [`CategoryId`](kvbc_types::CategoryId) is used
//! exactly once per block, regardless of category type.
//!
//! # Design Rules
//!
//! 1. A builder is consumed by [`Updates::add`]; it cannot be added twice.
//! 2. A repeated delete of the same key within one builder is dropped.
//! 3. Tags of an immutable value are unique.
//! 4. [`Updates::len`] is the sum of the sizes of all successfully added builders.
//! 5. Nothing in this crate hashes or persists data. The commit engine does.

pub mod config;
mod deletes;
pub mod error;
pub mod immutable;
pub mod input;
pub mod merkle;
pub mod updates;
pub mod versioned;

pub use config::UpdatesConfig;
pub use error::{UpdatesError, UpdatesResult};
pub use immutable::{ImmutableUpdates, ImmutableValue};
pub use input::{
    BlockMerkleInput, CategoryInput, CategoryUpdate, ImmutableInput, ImmutableValueUpdate,
    ValueWithFlags, VersionedInput,
};
pub use merkle::BlockMerkleUpdates;
pub use updates::{CategoryBuilder, Updates};
pub use versioned::{VersionedUpdates, VersionedValue};
