//! Builder for immutable categories.
//!
//! Keys in immutable categories have a single version only and can be tagged.
//! All key-values become stale from the block they are added in; this cannot
//! be turned off. Explicit deletes are not supported.

use std::collections::BTreeSet;

use kvbc_types::Key;

use crate::input::{ImmutableInput, ImmutableValueUpdate};

/// A value for an immutable category together with its tags.
///
/// Duplicate tags collapse to one. The stored tags are in ascending order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImmutableValue {
    update: ImmutableValueUpdate,
}

impl ImmutableValue {
    /// Create a value with the given tags.
    pub fn new<I, T>(data: impl Into<Vec<u8>>, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let unique: BTreeSet<String> = tags.into_iter().map(Into::into).collect();
        Self {
            update: ImmutableValueUpdate {
                data: data.into(),
                tags: unique.into_iter().collect(),
            },
        }
    }

    /// Create a value without tags.
    pub fn untagged(data: impl Into<Vec<u8>>) -> Self {
        Self::new(data, std::iter::empty::<String>())
    }

    pub fn data(&self) -> &[u8] {
        &self.update.data
    }

    pub fn tags(&self) -> &[String] {
        &self.update.tags
    }
}

/// Accumulates updates for one immutable category.
///
/// Not `Clone`: the builder is moved into [`Updates`](crate::Updates) once.
#[derive(Debug, Default)]
pub struct ImmutableUpdates {
    pub(crate) data: ImmutableInput,
}

impl ImmutableUpdates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for `key`, replacing any previous value for it.
    pub fn add_update(&mut self, key: impl Into<Key>, value: ImmutableValue) {
        self.data.kv.insert(key.into(), value.update);
    }

    /// Request a root hash per tag from the commit engine.
    pub fn calculate_root_hash(&mut self, hash: bool) {
        self.data.calculate_root_hash = hash;
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.data.kv.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.kv.is_empty()
    }

    pub fn data(&self) -> &ImmutableInput {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_tags_collapse() {
        let value = ImmutableValue::new(b"v".to_vec(), ["a", "b", "a"]);
        assert_eq!(value.tags(), &["a".to_string(), "b".to_string()]);
        assert_eq!(value.data(), b"v");
    }

    #[test]
    fn tags_are_sorted() {
        let value = ImmutableValue::new(b"v".to_vec(), ["z", "m", "a"]);
        assert_eq!(value.tags(), &["a", "m", "z"]);
    }

    #[test]
    fn untagged_value_has_no_tags() {
        assert!(ImmutableValue::untagged(b"v".to_vec()).tags().is_empty());
    }

    #[test]
    fn add_update_inserts() {
        let mut updates = ImmutableUpdates::new();
        assert!(updates.is_empty());
        updates.add_update(b"k1".to_vec(), ImmutableValue::new(b"v1".to_vec(), ["t1"]));
        updates.add_update(b"k2".to_vec(), ImmutableValue::untagged(b"v2".to_vec()));
        assert_eq!(updates.len(), 2);

        let stored = &updates.data().kv[b"k1".as_slice()];
        assert_eq!(stored.data, b"v1");
        assert_eq!(stored.tags, vec!["t1".to_string()]);
    }

    #[test]
    fn add_update_overwrites_same_key() {
        let mut updates = ImmutableUpdates::new();
        updates.add_update(b"k".to_vec(), ImmutableValue::new(b"v1".to_vec(), ["t1"]));
        updates.add_update(b"k".to_vec(), ImmutableValue::new(b"v2".to_vec(), ["t2"]));
        assert_eq!(updates.len(), 1);
        let stored = &updates.data().kv[b"k".as_slice()];
        assert_eq!(stored.data, b"v2");
        assert_eq!(stored.tags, vec!["t2".to_string()]);
    }

    #[test]
    fn root_hash_flag() {
        let mut updates = ImmutableUpdates::new();
        assert!(!updates.data().calculate_root_hash);
        updates.calculate_root_hash(true);
        assert!(updates.data().calculate_root_hash);
        updates.calculate_root_hash(false);
        assert!(!updates.data().calculate_root_hash);
    }
}
