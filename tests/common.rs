//! Common test utilities for building recipes, catalogs and safety logs.
use chrono::{DateTime, Duration, TimeZone, Utc};
use galley::prelude::*;

/// Fixed evaluation instant used by the compliance tests.
#[allow(dead_code)]
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

#[allow(dead_code)]
pub fn hours_ago(hours: i64) -> DateTime<Utc> {
    fixed_now() - Duration::hours(hours)
}

#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// A small price catalog.
///
/// Stock bones 10/kg, cream 4/l, eggs 0.25/item, flour 1.2/kg.
#[allow(dead_code)]
pub fn create_catalog() -> Vec<IngredientCost> {
    vec![
        IngredientCost::new("Stock bones", 10.0, PurchaseUnit::Kilogram),
        IngredientCost::new("Cream", 4.0, PurchaseUnit::Litre),
        IngredientCost::new("Eggs", 0.25, PurchaseUnit::Item),
        IngredientCost::new("Flour", 1.2, PurchaseUnit::Kilogram),
    ]
}

/// A stock that costs exactly 10 per batch and yields 2 kg.
#[allow(dead_code)]
pub fn create_stock() -> Recipe {
    Recipe::new("stock", 4)
        .with_name("Brown stock")
        .with_yield(2.0, Unit::Kilogram)
        .with_ingredient(Ingredient::catalog("stock bones", 1000.0, Unit::Gram))
}

/// Monitored items: one fridge, one freezer, one cooking check, one area without a range.
#[allow(dead_code)]
pub fn create_items() -> Vec<HaccpItem> {
    vec![
        HaccpItem {
            id: "fridge".to_string(),
            name: "Walk-in Fridge".to_string(),
            category: HaccpCategory::Fridge,
        },
        HaccpItem {
            id: "freezer".to_string(),
            name: "Καταψύκτης".to_string(),
            category: HaccpCategory::Freezer,
        },
        HaccpItem {
            id: "roast".to_string(),
            name: "Roast chicken core".to_string(),
            category: HaccpCategory::Cooking,
        },
        HaccpItem {
            id: "prep".to_string(),
            name: "Prep bench".to_string(),
            category: HaccpCategory::KitchenArea,
        },
    ]
}

/// A temperature log for `item_id`, `hours` before the fixed instant.
#[allow(dead_code)]
pub fn reading(id: &str, item_id: &str, hours: i64, value: &str) -> HaccpLog {
    HaccpLog::temperature(id, item_id, hours_ago(hours), value)
}
