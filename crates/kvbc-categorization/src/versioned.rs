//! Builder for versioned categories.
//!
//! Persists key-values versioned by block ID. Supports an option to request a
//! root hash from the key-values in the update, used for key proofs.

use kvbc_types::{CategoryType, Key};

use crate::deletes::UniqueDeletes;
use crate::input::{ValueWithFlags, VersionedInput};

/// A value for a versioned category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VersionedValue {
    pub data: Vec<u8>,
    /// Mark the key-value stale during the update itself.
    pub stale_on_update: bool,
}

impl VersionedValue {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            stale_on_update: false,
        }
    }

    /// A value that is marked stale at the block it is written in.
    pub fn stale_on_update(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            stale_on_update: true,
        }
    }
}

impl From<Vec<u8>> for VersionedValue {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for VersionedValue {
    fn from(data: &[u8]) -> Self {
        Self::new(data.to_vec())
    }
}

/// Accumulates updates and deletes for one versioned category.
///
/// An update and a delete of the same key may both appear; reconciling them
/// is left to the commit engine.
#[derive(Debug)]
pub struct VersionedUpdates {
    pub(crate) data: VersionedInput,
    unique_deletes: UniqueDeletes,
}

impl Default for VersionedUpdates {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionedUpdates {
    pub fn new() -> Self {
        Self {
            data: VersionedInput::default(),
            unique_deletes: UniqueDeletes::new(CategoryType::Versioned),
        }
    }

    /// Set the value for `key`, replacing any previous value for it.
    ///
    /// Plain bytes convert to a value with no flags set.
    pub fn add_update(&mut self, key: impl Into<Key>, value: impl Into<VersionedValue>) {
        let value = value.into();
        self.data.kv.insert(
            key.into(),
            ValueWithFlags {
                data: value.data,
                stale_on_update: value.stale_on_update,
            },
        );
    }

    /// Schedule `key` for deletion. A repeated delete of the same key is dropped.
    pub fn add_delete(&mut self, key: impl Into<Key>) {
        self.unique_deletes.push(&mut self.data.deletes, key.into());
    }

    /// Request a root hash for this category from the commit engine.
    pub fn calculate_root_hash(&mut self, hash: bool) {
        self.data.calculate_root_hash = hash;
    }

    /// Number of distinct updated keys. Deletes are not counted.
    pub fn len(&self) -> usize {
        self.data.kv.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.kv.is_empty()
    }

    pub fn data(&self) -> &VersionedInput {
        &self.data
    }
}
