use thiserror::Error;

/// Errors raised by the caller-guard operations of the cost engine.
///
/// The roll-up itself never fails: unknown prices and missing sub-recipes
/// contribute zero. These variants only cover divisions the caller asked for.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CostError {
    #[error("Recipe '{recipe_id}' has zero servings, cost per serving is undefined")]
    ZeroServings { recipe_id: String },

    #[error("Recipe '{recipe_id}' has a non-positive selling price ({price})")]
    NonPositiveSellingPrice { recipe_id: String, price: f64 },
}

/// Errors that can occur while loading or saving snapshots and configuration files.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Could not access file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Raised when a unit token is not one of the supported measurement units.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown unit '{0}'")]
pub struct UnitParseError(pub String);
