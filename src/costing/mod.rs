use crate::config::GalleyConfig;
use crate::error::CostError;
use crate::recipe::{CostCatalog, IngredientCost, Recipe};
use ahash::AHashMap;
use serde::Serialize;

mod breakdown;
mod resolver;

pub use breakdown::{CostBreakdown, CostLine, LineSource, UnpricedReason};
use resolver::CostResolver;

/// Headline numbers for one recipe.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostSummary {
    pub recipe_id: String,
    pub total: f64,
    pub per_serving: f64,
    /// Cost per serving as a percentage of the selling price, when one is set.
    pub food_cost_percentage: Option<f64>,
}

/// Rolls up recipe costs from a price catalog and a recipe collection.
///
/// The engine only indexes its inputs; it holds no cache of computed costs.
/// Every top-level call starts a fresh memo, so repeated calls with the same
/// inputs return the same result and edits made between calls are always seen.
///
/// Missing data never fails a computation: an ingredient without a catalog
/// price, or a sub-recipe that cannot be found, contributes zero.
pub struct CostEngine<'a> {
    recipes: AHashMap<&'a str, &'a Recipe>,
    catalog: CostCatalog<'a>,
    max_depth: usize,
}

impl<'a> CostEngine<'a> {
    /// Creates an engine over a recipe collection and a price catalog.
    pub fn new(recipes: &'a [Recipe], catalog: &'a [IngredientCost]) -> Self {
        Self::with_config(recipes, catalog, &GalleyConfig::default())
    }

    pub fn with_config(
        recipes: &'a [Recipe],
        catalog: &'a [IngredientCost],
        config: &GalleyConfig,
    ) -> Self {
        let mut index = AHashMap::with_capacity(recipes.len());
        for recipe in recipes {
            index.entry(recipe.id.as_str()).or_insert(recipe);
        }
        Self {
            recipes: index,
            catalog: CostCatalog::new(catalog),
            max_depth: config.max_sub_recipe_depth,
        }
    }

    pub fn find_recipe(&self, id: &str) -> Option<&'a Recipe> {
        self.recipes.get(id).copied()
    }

    /// Cost of one full batch of `recipe`, at its base servings.
    pub fn recipe_cost(&self, recipe: &Recipe) -> f64 {
        let mut resolver = CostResolver::new(self);
        let total = resolver.total(recipe);
        tracing::debug!(
            recipe_id = %recipe.id,
            total,
            sub_recipes = resolver.rolled_count(),
            "Recipe cost rolled up"
        );
        total
    }

    /// Batch cost divided by servings.
    ///
    /// # Errors
    ///
    /// Returns `CostError::ZeroServings` if the recipe declares zero servings.
    pub fn cost_per_serving(&self, recipe: &Recipe) -> Result<f64, CostError> {
        per_serving(recipe, self.recipe_cost(recipe))
    }

    /// Total, per-serving cost and food-cost percentage in one computation.
    ///
    /// # Errors
    ///
    /// Returns `CostError::ZeroServings` for a recipe without servings, and
    /// `CostError::NonPositiveSellingPrice` when a selling price is set but is not positive.
    pub fn summarize(&self, recipe: &Recipe) -> Result<CostSummary, CostError> {
        let total = self.recipe_cost(recipe);
        let per_serving = per_serving(recipe, total)?;
        let food_cost_percentage = match recipe.selling_price {
            Some(price) if price > 0.0 => Some(per_serving / price * 100.0),
            Some(price) => {
                return Err(CostError::NonPositiveSellingPrice {
                    recipe_id: recipe.id.clone(),
                    price,
                });
            }
            None => None,
        };
        Ok(CostSummary {
            recipe_id: recipe.id.clone(),
            total,
            per_serving,
            food_cost_percentage,
        })
    }

    /// Prices every ingredient line of `recipe`.
    pub fn breakdown(&self, recipe: &Recipe) -> CostBreakdown {
        let mut resolver = CostResolver::new(self);
        let lines = resolver.lines(recipe);
        let total = lines.iter().map(CostLine::contribution).sum();
        CostBreakdown {
            recipe_id: recipe.id.clone(),
            lines,
            total,
            sub_recipes_priced: resolver.rolled_count(),
        }
    }
}

fn per_serving(recipe: &Recipe, total: f64) -> Result<f64, CostError> {
    if recipe.servings == 0 {
        return Err(CostError::ZeroServings {
            recipe_id: recipe.id.clone(),
        });
    }
    Ok(total / f64::from(recipe.servings))
}

/// Cost of one full batch of `recipe`, resolving sub-recipes against `all_recipes`.
///
/// Builds the recipe and catalog indexes for this call only.
pub fn compute_recipe_cost(
    recipe: &Recipe,
    all_recipes: &[Recipe],
    catalog: &[IngredientCost],
) -> f64 {
    CostEngine::new(all_recipes, catalog).recipe_cost(recipe)
}
