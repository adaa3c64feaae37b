//! Per-category input records handed to the block commit engine.
//!
//! These are the accumulated contents of the category builders. Maps are
//! ordered so that iteration is deterministic and equality is structural.

use std::collections::BTreeMap;

use kvbc_types::{CategoryId, CategoryType, Key};
use serde::{Deserialize, Serialize};

/// A value in an immutable category together with its tags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImmutableValueUpdate {
    pub data: Vec<u8>,
    /// Unique tags, in ascending order.
    pub tags: Vec<String>,
}

/// Accumulated updates for one immutable category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImmutableInput {
    pub kv: BTreeMap<Key, ImmutableValueUpdate>,
    /// Request a root hash per tag from the commit engine.
    pub calculate_root_hash: bool,
}

/// A value in a versioned category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueWithFlags {
    pub data: Vec<u8>,
    /// Mark the key-value stale during the update itself.
    pub stale_on_update: bool,
}

/// Accumulated updates and deletes for one versioned category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionedInput {
    pub kv: BTreeMap<Key, ValueWithFlags>,
    /// Keys to delete, in request order, without duplicates.
    pub deletes: Vec<Key>,
    pub calculate_root_hash: bool,
}

/// Accumulated updates and deletes for one block merkle category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockMerkleInput {
    pub kv: BTreeMap<Key, Vec<u8>>,
    /// Keys to delete, in request order, without duplicates.
    pub deletes: Vec<Key>,
}

/// The typed contents of one category in a batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryUpdate {
    Immutable(ImmutableInput),
    Versioned(VersionedInput),
    BlockMerkle(BlockMerkleInput),
}

impl CategoryUpdate {
    /// The storage type of this category.
    pub fn category_type(&self) -> CategoryType {
        match self {
            Self::Immutable(_) => CategoryType::Immutable,
            Self::Versioned(_) => CategoryType::Versioned,
            Self::BlockMerkle(_) => CategoryType::BlockMerkle,
        }
    }

    /// Number of updated keys. Deletes are not counted.
    pub fn len(&self) -> usize {
        match self {
            Self::Immutable(input) => input.kv.len(),
            Self::Versioned(input) => input.kv.len(),
            Self::BlockMerkle(input) => input.kv.len(),
        }
    }

    /// Returns `true` if no keys are updated.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keys scheduled for deletion. Always empty for immutable categories.
    pub fn deletes(&self) -> &[Key] {
        match self {
            Self::Immutable(_) => &[],
            Self::Versioned(input) => &input.deletes,
            Self::BlockMerkle(input) => &input.deletes,
        }
    }

    /// Returns `true` if any updated or deleted key is empty.
    pub(crate) fn has_empty_key(&self) -> bool {
        let empty: &[u8] = &[];
        let empty_update = match self {
            Self::Immutable(input) => input.kv.contains_key(empty),
            Self::Versioned(input) => input.kv.contains_key(empty),
            Self::BlockMerkle(input) => input.kv.contains_key(empty),
        };
        empty_update || self.deletes().iter().any(|k| k.is_empty())
    }
}

impl From<ImmutableInput> for CategoryUpdate {
    fn from(input: ImmutableInput) -> Self {
        Self::Immutable(input)
    }
}

impl From<VersionedInput> for CategoryUpdate {
    fn from(input: VersionedInput) -> Self {
        Self::Versioned(input)
    }
}

impl From<BlockMerkleInput> for CategoryUpdate {
    fn from(input: BlockMerkleInput) -> Self {
        Self::BlockMerkle(input)
    }
}

/// The categories of one block, keyed by category identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInput {
    pub kv: BTreeMap<CategoryId, CategoryUpdate>,
}
