use crate::units::PurchaseUnit;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A price catalog entry: what one purchase unit of an ingredient costs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientCost {
    pub name: String,
    pub cost: f64,
    pub purchase_unit: PurchaseUnit,
}

impl IngredientCost {
    pub fn new(name: impl Into<String>, cost: f64, purchase_unit: PurchaseUnit) -> Self {
        Self {
            name: name.into(),
            cost,
            purchase_unit,
        }
    }
}

/// Case-insensitive index over a price catalog.
///
/// Names are matched exactly after lowercasing. When the catalog lists the same
/// name twice, the first entry wins.
#[derive(Debug, Clone, Default)]
pub struct CostCatalog<'a> {
    entries: AHashMap<String, &'a IngredientCost>,
}

impl<'a> CostCatalog<'a> {
    pub fn new(costs: &'a [IngredientCost]) -> Self {
        let mut entries = AHashMap::with_capacity(costs.len());
        for cost in costs {
            entries.entry(normalize(&cost.name)).or_insert(cost);
        }
        Self { entries }
    }

    pub fn lookup(&self, name: &str) -> Option<&'a IngredientCost> {
        self.entries.get(&normalize(name)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.to_lowercase()
}
