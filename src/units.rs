use crate::error::UnitParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Measurement unit of an ingredient line inside a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "g", alias = "gram", alias = "grams")]
    Gram,
    #[serde(rename = "kg", alias = "kilogram", alias = "kilograms")]
    Kilogram,
    #[serde(rename = "ml", alias = "millilitre", alias = "milliliter")]
    Millilitre,
    #[serde(rename = "l", alias = "litre", alias = "liter")]
    Litre,
    #[serde(rename = "item", alias = "items", alias = "pcs", alias = "piece")]
    Item,
    #[serde(rename = "tsp", alias = "teaspoon")]
    Teaspoon,
    #[serde(rename = "tbsp", alias = "tablespoon")]
    Tablespoon,
}

/// Unit a catalog price is quoted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PurchaseUnit {
    #[serde(rename = "kg", alias = "kilogram")]
    Kilogram,
    #[serde(rename = "l", alias = "litre", alias = "liter")]
    Litre,
    #[serde(rename = "item", alias = "items", alias = "pcs", alias = "piece")]
    Item,
}

impl Unit {
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Millilitre => "ml",
            Unit::Litre => "l",
            Unit::Item => "item",
            Unit::Teaspoon => "tsp",
            Unit::Tablespoon => "tbsp",
        }
    }
}

impl PurchaseUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            PurchaseUnit::Kilogram => "kg",
            PurchaseUnit::Litre => "l",
            PurchaseUnit::Item => "item",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}

impl fmt::Display for PurchaseUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "g" | "gram" | "grams" => Ok(Unit::Gram),
            "kg" | "kilogram" | "kilograms" => Ok(Unit::Kilogram),
            "ml" | "millilitre" | "milliliter" => Ok(Unit::Millilitre),
            "l" | "litre" | "liter" => Ok(Unit::Litre),
            "item" | "items" | "pcs" | "piece" => Ok(Unit::Item),
            "tsp" | "teaspoon" => Ok(Unit::Teaspoon),
            "tbsp" | "tablespoon" => Ok(Unit::Tablespoon),
            other => Err(UnitParseError(other.to_string())),
        }
    }
}

impl FromStr for PurchaseUnit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kilogram" => Ok(PurchaseUnit::Kilogram),
            "l" | "litre" | "liter" => Ok(PurchaseUnit::Litre),
            "item" | "items" | "pcs" | "piece" => Ok(PurchaseUnit::Item),
            other => Err(UnitParseError(other.to_string())),
        }
    }
}

/// Converts an in-recipe quantity into the unit a catalog price is quoted in.
///
/// Only grams to kilograms and millilitres to litres are scaled. Every other
/// pairing passes through unchanged; this is not a general unit system.
pub fn to_purchase_quantity(quantity: f64, unit: Unit, purchase_unit: PurchaseUnit) -> f64 {
    match (unit, purchase_unit) {
        (Unit::Gram, PurchaseUnit::Kilogram) | (Unit::Millilitre, PurchaseUnit::Litre) => {
            quantity / 1000.0
        }
        _ => quantity,
    }
}

/// Reconciles the quantity of a sub-recipe being consumed with the unit its yield is declared in.
///
/// Grams consumed from a kilogram yield are scaled down; all other combinations
/// are treated as directly compatible.
pub fn to_yield_quantity(quantity: f64, unit: Unit, yield_unit: Option<Unit>) -> f64 {
    match (unit, yield_unit) {
        (Unit::Gram, Some(Unit::Kilogram)) => quantity / 1000.0,
        _ => quantity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grams_priced_per_kilogram_are_scaled() {
        assert_eq!(to_purchase_quantity(250.0, Unit::Gram, PurchaseUnit::Kilogram), 0.25);
        assert_eq!(to_purchase_quantity(500.0, Unit::Millilitre, PurchaseUnit::Litre), 0.5);
    }

    #[test]
    fn mismatched_pairs_pass_through() {
        assert_eq!(to_purchase_quantity(3.0, Unit::Tablespoon, PurchaseUnit::Litre), 3.0);
        assert_eq!(to_purchase_quantity(250.0, Unit::Gram, PurchaseUnit::Item), 250.0);
        assert_eq!(to_purchase_quantity(2.0, Unit::Kilogram, PurchaseUnit::Kilogram), 2.0);
    }

    #[test]
    fn yield_reconciliation_only_handles_grams_from_kilograms() {
        assert_eq!(to_yield_quantity(500.0, Unit::Gram, Some(Unit::Kilogram)), 0.5);
        assert_eq!(to_yield_quantity(500.0, Unit::Millilitre, Some(Unit::Litre)), 500.0);
        assert_eq!(to_yield_quantity(500.0, Unit::Gram, None), 500.0);
    }

    #[test]
    fn display_respects_width() {
        assert_eq!(format!("[{:<4}]", Unit::Gram), "[g   ]");
        assert_eq!(format!("[{:>3}]", PurchaseUnit::Litre), "[  l]");
    }

    #[test]
    fn parses_unit_aliases() {
        assert_eq!("Grams".parse::<Unit>(), Ok(Unit::Gram));
        assert_eq!(" TBSP ".parse::<Unit>(), Ok(Unit::Tablespoon));
        assert_eq!("litre".parse::<PurchaseUnit>(), Ok(PurchaseUnit::Litre));
        assert!("cup".parse::<Unit>().is_err());
    }
}
