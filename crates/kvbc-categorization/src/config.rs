use serde::{Deserialize, Serialize};

use crate::error::{UpdatesError, UpdatesResult};

/// Validation settings applied by [`Updates::add`](crate::Updates::add).
///
/// Empty category identifiers and duplicate categories are always rejected;
/// these settings only add checks on top.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdatesConfig {
    /// Reject builders that update or delete an empty key.
    pub reject_empty_keys: bool,
    /// Maximum number of categories in one batch. `None` means unbounded.
    pub max_categories: Option<usize>,
}

impl Default for UpdatesConfig {
    fn default() -> Self {
        Self {
            reject_empty_keys: false,
            max_categories: None,
        }
    }
}

impl UpdatesConfig {
    /// The strictest configuration: empty keys are rejected.
    pub fn strict() -> Self {
        Self {
            reject_empty_keys: true,
            ..Default::default()
        }
    }

    /// Parse a configuration from TOML. Missing fields take their defaults.
    pub fn from_toml_str(s: &str) -> UpdatesResult<Self> {
        toml::from_str(s).map_err(|e| UpdatesError::Config(e.to_string()))
    }
}
