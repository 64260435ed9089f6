use crate::error::DataError;
use crate::haccp::{HaccpItem, HaccpLog, HaccpReminder};
use crate::recipe::{IngredientCost, Recipe};
use serde::{Deserialize, Serialize};
use std::fs;

/// A consistent, read-only snapshot of everything the engines consume.
///
/// This is the JSON document the command-line tools read and write. Callers
/// embedding the engines can just as well build the collections in memory.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct KitchenSnapshot {
    pub recipes: Vec<Recipe>,
    pub ingredient_costs: Vec<IngredientCost>,
    pub haccp_items: Vec<HaccpItem>,
    pub haccp_logs: Vec<HaccpLog>,
    pub haccp_reminders: Vec<HaccpReminder>,
}

impl KitchenSnapshot {
    /// Load a snapshot from a JSON file.
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

    /// Write the snapshot as pretty-printed JSON.
    pub fn save(&self, path: &str) -> Result<(), DataError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| DataError::Io {
            path: path.to_string(),
            source,
        })
    }

    pub fn find_recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn find_item(&self, id: &str) -> Option<&HaccpItem> {
        self.haccp_items.iter().find(|i| i.id == id)
    }
}
