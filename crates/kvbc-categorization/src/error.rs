//! Error types for batch construction.

use kvbc_types::{CategoryType, TypeError};

/// Errors that can occur while assembling a block's updates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdatesError {
    /// The category was already added to this batch. Two independent write
    /// sets for one category within a block are never valid.
    #[error("only one update for category is allowed. type: {attempted}, category: {category} (already present as {existing})")]
    DuplicateCategory {
        category: String,
        existing: CategoryType,
        attempted: CategoryType,
    },

    /// The category identifier is invalid.
    #[error("invalid category identifier: {0}")]
    InvalidCategoryId(#[from] TypeError),

    /// A builder holds an empty key and empty keys are rejected.
    #[error("empty key in category: {category}")]
    EmptyKey { category: String },

    /// The batch already holds the configured maximum number of categories.
    #[error("too many categories in batch: limit is {limit}")]
    TooManyCategories { limit: usize },

    /// Configuration could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience alias for batch construction results.
pub type UpdatesResult<T> = Result<T, UpdatesError>;
