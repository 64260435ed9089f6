use crate::error::DataError;
use serde::{Deserialize, Serialize};
use std::fs;

/// Tunables shared by the engines. Every field has a default, so a partial
/// JSON document (or none at all) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleyConfig {
    /// Trailing window, in hours, within which every reminder's item must have a log.
    pub missing_check_window_hours: i64,
    /// Deepest chain of nested sub-recipes the cost roll-up will follow.
    pub max_sub_recipe_depth: usize,
}

impl Default for GalleyConfig {
    fn default() -> Self {
        Self {
            missing_check_window_hours: 24,
            max_sub_recipe_depth: 32,
        }
    }
}

impl GalleyConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, DataError> {
        let content = fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_window_hours(mut self, hours: i64) -> Self {
        self.missing_check_window_hours = hours;
        self
    }
}
