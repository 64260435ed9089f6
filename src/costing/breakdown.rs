use crate::units::{PurchaseUnit, Unit};
use serde::Serialize;

/// Why an ingredient line could not be priced. Unpriced lines contribute zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UnpricedReason {
    /// No catalog entry matches the ingredient name.
    NoCatalogEntry,
    /// The referenced sub-recipe does not exist.
    MissingSubRecipe,
    /// The sub-recipe is already being priced further up the chain.
    Cycle,
    /// The chain of nested sub-recipes exceeded the configured depth.
    TooDeep,
}

/// How a line's cost was obtained.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum LineSource {
    #[serde(rename_all = "camelCase")]
    Catalog {
        purchase_unit: PurchaseUnit,
        unit_cost: f64,
        purchase_quantity: f64,
    },
    #[serde(rename_all = "camelCase")]
    SubRecipe {
        recipe_id: String,
        batch_cost: f64,
        yield_divisor: f64,
        yield_quantity: f64,
    },
    Unpriced {
        reason: UnpricedReason,
    },
}

/// The priced form of one ingredient line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostLine {
    pub ingredient: String,
    pub quantity: f64,
    pub unit: Unit,
    pub source: LineSource,
    /// `None` when the line could not be priced.
    pub cost: Option<f64>,
}

impl CostLine {
    pub fn contribution(&self) -> f64 {
        self.cost.unwrap_or(0.0)
    }

    pub fn is_priced(&self) -> bool {
        self.cost.is_some()
    }
}

/// Per-ingredient cost lines of one recipe. Contributions sum to the recipe's total cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub recipe_id: String,
    pub lines: Vec<CostLine>,
    pub total: f64,
    /// Sub-recipe roll-ups computed while pricing the lines. Costs served from the
    /// per-call memo are not counted, so a sub-recipe used twice counts once.
    pub sub_recipes_priced: usize,
}

impl CostBreakdown {
    pub fn unpriced(&self) -> impl Iterator<Item = &CostLine> {
        self.lines.iter().filter(|line| !line.is_priced())
    }
}
