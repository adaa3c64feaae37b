use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Opaque key bytes. Keys are unique within one category's update set.
pub type Key = Vec<u8>;

/// Identifier naming a category of the key-value store.
///
/// A `CategoryId` is never empty. Within one block, an identifier maps to
/// exactly one category type.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryId(String);

impl CategoryId {
    /// Create a category identifier, rejecting the empty string.
    pub fn new(id: impl Into<String>) -> Result<Self, TypeError> {
        let id = id.into();
        if id.is_empty() {
            return Err(TypeError::EmptyCategoryId);
        }
        Ok(Self(id))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CategoryId({})", self.0)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CategoryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets maps keyed by `CategoryId` be queried with a plain `&str`.
impl Borrow<str> for CategoryId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CategoryId {
    type Error = TypeError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl TryFrom<&str> for CategoryId {
    type Error = TypeError;

    fn try_from(id: &str) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<CategoryId> for String {
    fn from(id: CategoryId) -> Self {
        id.0
    }
}

/// Storage type of a category.
///
/// Each type has its own persistence and proof semantics:
/// - `Immutable` keys have a single version, can be tagged, and cannot be deleted.
/// - `Versioned` keys are versioned by block and may be marked stale on update.
/// - `BlockMerkle` keys are committed into a merkle tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CategoryType {
    Immutable,
    Versioned,
    BlockMerkle,
}

impl CategoryType {
    /// All category types.
    pub const ALL: [CategoryType; 3] = [Self::Immutable, Self::Versioned, Self::BlockMerkle];

    /// Whether categories of this type accept explicit deletes.
    pub fn supports_deletes(&self) -> bool {
        !matches!(self, Self::Immutable)
    }
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Immutable => write!(f, "Immutable"),
            Self::Versioned => write!(f, "Versioned"),
            Self::BlockMerkle => write!(f, "BlockMerkle"),
        }
    }
}
