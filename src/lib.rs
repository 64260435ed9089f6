//! # Galley - Recipe Costing and Food-Safety Compliance Engine
//!
//! **Galley** is the computational core of a kitchen back-office: it rolls up
//! recipe costs through nested sub-recipes, and turns HACCP safety logs into a
//! compliance score and lists of open issues. Both engines are pure functions
//! over in-memory data; loading, persistence and presentation belong to the caller.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Data**: Build `Recipe`, `IngredientCost`, `HaccpItem`, `HaccpLog` and
//!     `HaccpReminder` values in memory, or read a `KitchenSnapshot` from JSON.
//! 2.  **Cost**: Create a `CostEngine` over the recipes and the price catalog, then ask it
//!     for a recipe's batch cost, cost per serving, or line-by-line breakdown.
//! 3.  **Check Compliance**: Create a `ComplianceEngine` at an instant and ask it for the
//!     score, violations, overdue reminders, missing checks, or all of them as a report.
//!
//! Missing data never aborts a computation. An ingredient without a price costs
//! nothing, a log for an unknown item is ignored, and an unparsable reading is
//! never flagged.
//!
//! ## Quick Start
//!
//! ```rust
//! use galley::prelude::*;
//! use chrono::{Duration, Utc};
//!
//! let catalog = vec![
//!     IngredientCost::new("Flour", 1.20, PurchaseUnit::Kilogram),
//!     IngredientCost::new("Butter", 9.00, PurchaseUnit::Kilogram),
//! ];
//! let dough = Recipe::new("dough", 1)
//!     .with_yield(1.0, Unit::Kilogram)
//!     .with_ingredient(Ingredient::catalog("flour", 600.0, Unit::Gram))
//!     .with_ingredient(Ingredient::catalog("butter", 400.0, Unit::Gram));
//! let tart = Recipe::new("tart", 8)
//!     .with_ingredient(Ingredient::sub_recipe("Dough", "dough", 500.0, Unit::Gram));
//! let recipes = vec![dough, tart.clone()];
//!
//! let engine = CostEngine::new(&recipes, &catalog);
//! let total = engine.recipe_cost(&tart);
//! assert!((total - 2.16).abs() < 1e-9);
//!
//! let now = Utc::now();
//! let items = vec![HaccpItem {
//!     id: "f1".to_string(),
//!     name: "Walk-in fridge".to_string(),
//!     category: HaccpCategory::Fridge,
//! }];
//! let logs = vec![
//!     HaccpLog::temperature("l1", "f1", now - Duration::hours(3), "3.5"),
//!     HaccpLog::temperature("l2", "f1", now - Duration::hours(1), "8.0"),
//! ];
//! let compliance = ComplianceEngine::at(now);
//! assert_eq!(compliance.compliance_score(&logs, &items), 50);
//! ```

pub mod config;
pub mod costing;
pub mod data;
pub mod error;
pub mod haccp;
pub mod prelude;
pub mod recipe;
pub mod report;
pub mod units;
