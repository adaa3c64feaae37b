//! Builder for block merkle categories.
//!
//! Key-values are persisted in a merkle tree built on top of the underlying
//! key-value store. The root hash is always computed, so there is no flag.

use kvbc_types::{CategoryType, Key};

use crate::deletes::UniqueDeletes;
use crate::input::BlockMerkleInput;

/// Accumulates updates and deletes for one block merkle category.
#[derive(Debug)]
pub struct BlockMerkleUpdates {
    pub(crate) data: BlockMerkleInput,
    unique_deletes: UniqueDeletes,
}

impl Default for BlockMerkleUpdates {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockMerkleUpdates {
    pub fn new() -> Self {
        Self {
            data: BlockMerkleInput::default(),
            unique_deletes: UniqueDeletes::new(CategoryType::BlockMerkle),
        }
    }

    /// Set the value for `key`, replacing any previous value for it.
    pub fn add_update(&mut self, key: impl Into<Key>, value: impl Into<Vec<u8>>) {
        self.data.kv.insert(key.into(), value.into());
    }

    /// Schedule `key` for deletion. A repeated delete of the same key is dropped.
    pub fn add_delete(&mut self, key: impl Into<Key>) {
        self.unique_deletes.push(&mut self.data.deletes, key.into());
    }

    /// Number of distinct updated keys. Deletes are not counted.
    pub fn len(&self) -> usize {
        self.data.kv.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.kv.is_empty()
    }

    pub fn data(&self) -> &BlockMerkleInput {
        &self.data
    }
}

impl From<BlockMerkleInput> for BlockMerkleUpdates {
    /// Continue building from an existing input. Duplicate deletes in the
    /// input are dropped.
    fn from(mut data: BlockMerkleInput) -> Self {
        let unique_deletes = UniqueDeletes::rebuild(CategoryType::BlockMerkle, &mut data.deletes);
        Self {
            data,
            unique_deletes,
        }
    }
}
