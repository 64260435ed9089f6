//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the galley crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use galley::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let snapshot = KitchenSnapshot::from_file("path/to/kitchen.json")?;
//!
//! let costs = CostEngine::new(&snapshot.recipes, &snapshot.ingredient_costs);
//! for recipe in &snapshot.recipes {
//!     println!("{}", ReportFormatter::format_summary(&costs.summarize(recipe)?));
//! }
//!
//! let report = ComplianceEngine::new().report(
//!     &snapshot.haccp_logs,
//!     &snapshot.haccp_items,
//!     &snapshot.haccp_reminders,
//! );
//! println!("{}", ReportFormatter::format_compliance(&report));
//! # Ok(())
//! # }
//! ```

// Costing
pub use crate::costing::{
    CostBreakdown, CostEngine, CostLine, CostSummary, LineSource, UnpricedReason,
    compute_recipe_cost,
};
pub use crate::recipe::{CostCatalog, Ingredient, IngredientCost, Recipe, RecipeYield};
pub use crate::units::{PurchaseUnit, Unit};

// Food safety
pub use crate::haccp::{
    CheckFrequency, ComplianceEngine, ComplianceReport, HaccpCategory, HaccpItem, HaccpLog,
    HaccpReminder, LogType, MissingCheck, SafeRange, TemperatureTrend, Trend, Violation,
    analyze_temperature_trends, is_out_of_range,
};

// Data, configuration and formatting
pub use crate::config::GalleyConfig;
pub use crate::data::KitchenSnapshot;
pub use crate::report::ReportFormatter;

// Error types
pub use crate::error::{CostError, DataError, UnitParseError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
