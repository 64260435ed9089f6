use crate::units::Unit;
use serde::{Deserialize, Serialize};

/// A recipe as far as costing is concerned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Number of servings one full batch produces.
    pub servings: u32,
    /// What one full batch produces when the recipe is consumed as a sub-recipe elsewhere.
    #[serde(default, rename = "yield", skip_serializing_if = "Option::is_none")]
    pub recipe_yield: Option<RecipeYield>,
    /// Menu price of one serving, used for food-cost percentages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selling_price: Option<f64>,
}

/// One line of a recipe: either a catalog ingredient or a reference to another recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
    pub unit: Unit,
    #[serde(default)]
    pub is_sub_recipe: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<String>,
}

/// Total quantity produced by one batch of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecipeYield {
    pub quantity: f64,
    pub unit: Unit,
}

impl Recipe {
    pub fn new(id: impl Into<String>, servings: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            ingredients: Vec::new(),
            servings,
            recipe_yield: None,
            selling_price: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    pub fn with_yield(mut self, quantity: f64, unit: Unit) -> Self {
        self.recipe_yield = Some(RecipeYield { quantity, unit });
        self
    }

    pub fn with_selling_price(mut self, price: f64) -> Self {
        self.selling_price = Some(price);
        self
    }

    /// Divisor applied to a sub-recipe's batch cost. Falls back to 1 when no
    /// usable yield quantity is declared.
    pub fn yield_divisor(&self) -> f64 {
        self.recipe_yield
            .map(|y| y.quantity)
            .filter(|q| q.is_finite() && *q > 0.0)
            .unwrap_or(1.0)
    }

    pub fn yield_unit(&self) -> Option<Unit> {
        self.recipe_yield.map(|y| y.unit)
    }

    /// Name for display, falling back to the identifier.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() { &self.id } else { &self.name }
    }
}

impl Ingredient {
    /// An ingredient priced through the cost catalog.
    pub fn catalog(name: impl Into<String>, quantity: f64, unit: Unit) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit,
            is_sub_recipe: false,
            recipe_id: None,
        }
    }

    /// An ingredient priced by rolling up another recipe.
    pub fn sub_recipe(
        name: impl Into<String>,
        recipe_id: impl Into<String>,
        quantity: f64,
        unit: Unit,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit,
            is_sub_recipe: true,
            recipe_id: Some(recipe_id.into()),
        }
    }
}
