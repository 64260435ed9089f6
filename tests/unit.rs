//! Unit tests for core Galley types, range inference and formatting.
mod common;
use common::*;
use galley::prelude::*;

#[test]
fn test_unit_display() {
    assert_eq!(format!("{}", Unit::Gram), "g");
    assert_eq!(format!("{}", Unit::Tablespoon), "tbsp");
    assert_eq!(format!("{}", PurchaseUnit::Litre), "l");
}

#[test]
fn test_unit_serde_names() {
    assert_eq!(serde_json::to_string(&Unit::Millilitre).unwrap(), "\"ml\"");
    assert_eq!(
        serde_json::from_str::<Unit>("\"teaspoon\"").unwrap(),
        Unit::Teaspoon
    );
    assert_eq!(
        serde_json::to_string(&CheckFrequency::Every4Hours).unwrap(),
        "\"every_4_hours\""
    );
    assert_eq!(
        serde_json::to_string(&HaccpCategory::SupplierDelivery).unwrap(),
        "\"supplier_delivery\""
    );
    assert_eq!(serde_json::to_string(&Trend::Rising).unwrap(), "\"rising\"");
}

#[test]
fn test_out_of_range_keyword_table() {
    assert!(is_out_of_range("6", "Bar fridge"));
    assert!(!is_out_of_range("4.9", "Bar fridge"));
    assert!(is_out_of_range("-10", "ΚΑΤΑΨΎΚΤΗΣ"));
    assert!(is_out_of_range("70", "Κοτόπουλο σχάρας"));
    assert!(!is_out_of_range("75", "Grilled chicken"));
    assert!(is_out_of_range("60", "Bain marie"));
}

#[test]
fn test_items_without_keywords_are_never_flagged() {
    assert!(!is_out_of_range("500", "Dry store"));
    assert!(!is_out_of_range("-40", "Delivery van"));
}

#[test]
fn test_unparsable_values_are_never_flagged() {
    assert!(!is_out_of_range("", "Walk-in fridge"));
    assert!(!is_out_of_range("warm", "Walk-in fridge"));
}

#[test]
fn test_error_display() {
    let err = CostError::ZeroServings {
        recipe_id: "soup".to_string(),
    };
    assert!(err.to_string().contains("soup"));
    assert!(err.to_string().contains("zero servings"));

    let unit_err = "cup".parse::<Unit>().unwrap_err();
    assert_eq!(unit_err.to_string(), "Unknown unit 'cup'");

    let parse_err = KitchenSnapshot::from_json("{ not json").unwrap_err();
    assert!(parse_err.to_string().contains("Failed to parse JSON"));

    let io_err = KitchenSnapshot::from_file("/definitely/not/here.json").unwrap_err();
    assert!(io_err.to_string().contains("/definitely/not/here.json"));
}

#[test]
fn test_config_defaults_fill_missing_fields() {
    let config = GalleyConfig::from_json(r#"{ "missingCheckWindowHours": 12 }"#).unwrap();
    assert_eq!(config.missing_check_window_hours, 12);
    assert_eq!(config.max_sub_recipe_depth, 32);
    assert_eq!(GalleyConfig::from_json("{}").unwrap(), GalleyConfig::default());
}

#[test]
fn test_breakdown_formatting() {
    let catalog = create_catalog();
    let recipe = Recipe::new("r", 1)
        .with_ingredient(Ingredient::catalog("Cream", 500.0, Unit::Millilitre))
        .with_ingredient(Ingredient::catalog("Saffron", 1.0, Unit::Gram));
    let recipes = vec![recipe.clone()];

    let breakdown = CostEngine::new(&recipes, &catalog).breakdown(&recipe);
    let text = ReportFormatter::format_breakdown(&breakdown);
    assert!(text.contains("Cream"));
    assert!(text.contains("0.5 l @ 4.00/l"));
    assert!(text.contains("no catalog price"));
    assert!(text.contains("2.00"));

    // The unit column is padded, so details line up whatever the unit symbol.
    let column = |name: &str, detail: &str| {
        let line = text.lines().find(|l| l.contains(name)).unwrap();
        line.find(detail).unwrap()
    };
    assert_eq!(column("Cream", "0.5 l @"), column("Saffron", "no catalog price"));
}

#[test]
fn test_compliance_formatting() {
    let items = create_items();
    let logs = vec![reading("a", "fridge", 1, "9").with_author("Sam")];
    let reminders = vec![HaccpReminder::new("r1", "freezer", CheckFrequency::Daily)];

    let report = ComplianceEngine::at(fixed_now()).report(&logs, &items, &reminders);
    let text = ReportFormatter::format_compliance(&report);
    assert!(text.starts_with("Compliance score: 0% (1 logs, 1 violations)"));
    assert!(text.contains("Walk-in Fridge: 9 outside [0, 5] (logged by Sam)"));
    assert!(text.contains("r1 (item freezer): 24h since last check"));
    assert!(!text.contains("Overdue reminders"));
}
