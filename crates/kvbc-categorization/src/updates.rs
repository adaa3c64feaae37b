//! The per-block batch of categorized updates.
//!
//! [`Updates`] takes ownership of category builders and maps each category
//! identifier to exactly one typed input record. Once handed to the commit
//! engine the batch is read-only: there is no way to remove or replace a
//! category after it has been added.

use kvbc_types::{CategoryId, CategoryType};
use tracing::{debug, warn};

use crate::config::UpdatesConfig;
use crate::error::{UpdatesError, UpdatesResult};
use crate::immutable::ImmutableUpdates;
use crate::input::{CategoryInput, CategoryUpdate};
use crate::merkle::BlockMerkleUpdates;
use crate::versioned::VersionedUpdates;

mod private {
    use crate::input::CategoryUpdate;

    pub trait Sealed {
        fn into_category_update(self) -> CategoryUpdate;
    }
}

/// A category builder that can be moved into [`Updates`].
///
/// Sealed: implemented only by [`ImmutableUpdates`], [`VersionedUpdates`] and
/// [`BlockMerkleUpdates`].
pub trait CategoryBuilder: private::Sealed {
    /// The storage type of the category this builder fills.
    const CATEGORY_TYPE: CategoryType;
}

impl private::Sealed for ImmutableUpdates {
    fn into_category_update(self) -> CategoryUpdate {
        CategoryUpdate::Immutable(self.data)
    }
}

impl CategoryBuilder for ImmutableUpdates {
    const CATEGORY_TYPE: CategoryType = CategoryType::Immutable;
}

impl private::Sealed for VersionedUpdates {
    fn into_category_update(self) -> CategoryUpdate {
        CategoryUpdate::Versioned(self.data)
    }
}

impl CategoryBuilder for VersionedUpdates {
    const CATEGORY_TYPE: CategoryType = CategoryType::Versioned;
}

impl private::Sealed for BlockMerkleUpdates {
    fn into_category_update(self) -> CategoryUpdate {
        CategoryUpdate::BlockMerkle(self.data)
    }
}

impl CategoryBuilder for BlockMerkleUpdates {
    const CATEGORY_TYPE: CategoryType = CategoryType::BlockMerkle;
}

/// Updates for all categories of one block.
///
/// Equality compares the category contents only. Running totals and the
/// configuration are derived state.
#[derive(Debug, Default)]
pub struct Updates {
    category_updates: CategoryInput,
    immutable_size: usize,
    versioned_kv_size: usize,
    block_merkle_size: usize,
    config: UpdatesConfig,
}

impl Updates {
    /// Create an empty batch with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty batch with the given validation settings.
    pub fn with_config(config: UpdatesConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Move a category builder into the batch under `category_id`.
    ///
    /// Fails if the identifier is empty or already present in the batch,
    /// whatever its type. A failed call leaves the batch unchanged; the
    /// builder is consumed either way.
    pub fn add<B: CategoryBuilder>(
        &mut self,
        category_id: impl Into<String>,
        updates: B,
    ) -> UpdatesResult<()> {
        let attempted = B::CATEGORY_TYPE;
        let category_id = CategoryId::new(category_id).map_err(|e| {
            warn!(category_type = %attempted, "rejecting category with invalid identifier");
            UpdatesError::from(e)
        })?;

        if let Some(existing) = self.category_updates.kv.get(&category_id) {
            warn!(
                category = %category_id,
                existing = %existing.category_type(),
                attempted = %attempted,
                "rejecting second update for category"
            );
            return Err(UpdatesError::DuplicateCategory {
                category: category_id.into_string(),
                existing: existing.category_type(),
                attempted,
            });
        }

        if let Some(limit) = self.config.max_categories {
            if self.category_updates.kv.len() >= limit {
                warn!(category = %category_id, limit, "rejecting category over limit");
                return Err(UpdatesError::TooManyCategories { limit });
            }
        }

        let update = updates.into_category_update();
        if self.config.reject_empty_keys && update.has_empty_key() {
            warn!(category = %category_id, "rejecting category with empty key");
            return Err(UpdatesError::EmptyKey {
                category: category_id.into_string(),
            });
        }

        let size = update.len();
        *self.total_mut(attempted) += size;
        debug!(
            category = %category_id,
            category_type = %attempted,
            keys = size,
            deletes = update.deletes().len(),
            "category added to block updates"
        );
        self.category_updates.kv.insert(category_id, update);
        Ok(())
    }

    fn total_mut(&mut self, category_type: CategoryType) -> &mut usize {
        match category_type {
            CategoryType::Immutable => &mut self.immutable_size,
            CategoryType::Versioned => &mut self.versioned_kv_size,
            CategoryType::BlockMerkle => &mut self.block_merkle_size,
        }
    }

    /// Total number of updated keys across all categories.
    pub fn len(&self) -> usize {
        self.immutable_size + self.versioned_kv_size + self.block_merkle_size
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Updated keys contributed by immutable categories.
    pub fn immutable_len(&self) -> usize {
        self.immutable_size
    }

    /// Updated keys contributed by versioned categories.
    pub fn versioned_len(&self) -> usize {
        self.versioned_kv_size
    }

    /// Updated keys contributed by block merkle categories.
    pub fn block_merkle_len(&self) -> usize {
        self.block_merkle_size
    }

    /// Number of categories in the batch.
    pub fn category_count(&self) -> usize {
        self.category_updates.kv.len()
    }

    pub fn contains(&self, category_id: &str) -> bool {
        self.category_updates.kv.contains_key(category_id)
    }

    pub fn get(&self, category_id: &str) -> Option<&CategoryUpdate> {
        self.category_updates.kv.get(category_id)
    }

    pub fn categories(&self) -> &CategoryInput {
        &self.category_updates
    }

    pub fn config(&self) -> &UpdatesConfig {
        &self.config
    }

    /// Hand the category records to the commit engine.
    pub fn into_input(self) -> CategoryInput {
        self.category_updates
    }
}

impl From<CategoryInput> for Updates {
    /// Wrap existing category records. Running totals are recomputed.
    fn from(category_updates: CategoryInput) -> Self {
        let mut updates = Self::default();
        for update in category_updates.kv.values() {
            *updates.total_mut(update.category_type()) += update.len();
        }
        updates.category_updates = category_updates;
        updates
    }
}

impl PartialEq for Updates {
    fn eq(&self, other: &Self) -> bool {
        self.category_updates == other.category_updates
    }
}

impl Eq for Updates {}
