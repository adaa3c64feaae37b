use std::collections::BTreeSet;

use kvbc_types::{CategoryType, Key};
use tracing::warn;

/// Keys already scheduled for deletion by one builder.
///
/// Only used to drop repeated delete requests; not part of the input record.
#[derive(Debug)]
pub(crate) struct UniqueDeletes {
    seen: BTreeSet<Key>,
    category_type: CategoryType,
}

impl UniqueDeletes {
    pub(crate) fn new(category_type: CategoryType) -> Self {
        Self {
            seen: BTreeSet::new(),
            category_type,
        }
    }

    /// Append `key` to `deletes` unless it was already requested.
    ///
    /// Returns `false` if the request was dropped as a duplicate.
    pub(crate) fn push(&mut self, deletes: &mut Vec<Key>, key: Key) -> bool {
        if self.seen.contains(&key) {
            warn!(
                category_type = %self.category_type,
                key = %hex::encode(&key),
                "dropping duplicate delete"
            );
            return false;
        }
        self.seen.insert(key.clone());
        deletes.push(key);
        true
    }

    /// Rebuild the set from an existing delete list, dropping duplicates in place.
    pub(crate) fn rebuild(category_type: CategoryType, deletes: &mut Vec<Key>) -> Self {
        let mut unique = Self::new(category_type);
        for key in std::mem::take(deletes) {
            unique.push(deletes, key);
        }
        unique
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_key_is_dropped() {
        let mut unique = UniqueDeletes::new(CategoryType::Versioned);
        let mut deletes = Vec::new();
        assert!(unique.push(&mut deletes, b"a".to_vec()));
        assert!(!unique.push(&mut deletes, b"a".to_vec()));
        assert!(unique.push(&mut deletes, b"b".to_vec()));
        assert_eq!(deletes, vec![b"a".to_vec(), b"b".to_vec()]);
    }

    #[test]
    fn rebuild_keeps_first_occurrence_order() {
        let mut deletes = vec![b"b".to_vec(), b"a".to_vec(), b"b".to_vec()];
        let mut unique = UniqueDeletes::rebuild(CategoryType::BlockMerkle, &mut deletes);
        assert_eq!(deletes, vec![b"b".to_vec(), b"a".to_vec()]);
        assert!(!unique.push(&mut deletes, b"a".to_vec()));
    }
}
