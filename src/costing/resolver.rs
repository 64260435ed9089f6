use super::CostEngine;
use super::breakdown::{CostLine, LineSource, UnpricedReason};
use crate::recipe::{Ingredient, Recipe};
use crate::units::{to_purchase_quantity, to_yield_quantity};
use ahash::{AHashMap, AHashSet};

/// A sub-recipe rolled up in full.
#[derive(Clone, Copy)]
struct Rolled {
    cost: f64,
    /// Nesting levels the roll-up needed, counting the sub-recipe itself.
    reach: usize,
}

/// Bookkeeping for the recipe currently being rolled up.
#[derive(Clone, Copy)]
struct Frame {
    reach: usize,
    /// Cleared when a line was cut off by a cycle or the depth cap.
    complete: bool,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            reach: 0,
            complete: true,
        }
    }
}

/// Prices recipes for a single top-level computation.
///
/// The memo and the in-progress set live exactly as long as the resolver, so a
/// sub-recipe referenced several times within one call is priced once, and
/// nothing is carried over to the next call.
///
/// Only complete roll-ups are memoized. A cost cut short by a cycle or by the
/// depth cap depends on where the sub-recipe was reached, so it is recomputed
/// at each reference instead. A memoized cost is reused wherever its nesting
/// still fits under the cap, which keeps totals independent of line order.
pub(super) struct CostResolver<'e, 'a> {
    engine: &'e CostEngine<'a>,
    memo: AHashMap<String, Rolled>,
    in_progress: AHashSet<String>,
    depth: usize,
    frame: Frame,
    rolled: usize,
}

impl<'e, 'a> CostResolver<'e, 'a> {
    pub(super) fn new(engine: &'e CostEngine<'a>) -> Self {
        Self {
            engine,
            memo: AHashMap::new(),
            in_progress: AHashSet::new(),
            depth: 0,
            frame: Frame::default(),
            rolled: 0,
        }
    }

    /// Total batch cost of a recipe. Unpriced lines count as zero.
    pub(super) fn total(&mut self, recipe: &Recipe) -> f64 {
        self.lines(recipe).iter().map(CostLine::contribution).sum()
    }

    /// Prices each line of a recipe. Shares the memo with `total`.
    pub(super) fn lines(&mut self, recipe: &Recipe) -> Vec<CostLine> {
        if !self.in_progress.insert(recipe.id.clone()) {
            return Vec::new();
        }
        let lines = recipe
            .ingredients
            .iter()
            .map(|ingredient| self.price_line(ingredient))
            .collect();
        self.in_progress.remove(&recipe.id);
        lines
    }

    /// Number of sub-recipe roll-ups actually computed in this call. Memo hits are not counted.
    pub(super) fn rolled_count(&self) -> usize {
        self.rolled
    }

    /// Memoized cost of `recipe`, if it is known and its nesting fits at the current depth.
    fn memoized(&self, recipe: &Recipe) -> Option<Rolled> {
        self.memo
            .get(&recipe.id)
            .copied()
            .filter(|hit| self.depth + hit.reach <= self.engine.max_depth)
    }

    /// Rolls up a sub-recipe one level below the current depth.
    fn roll(&mut self, recipe: &Recipe) -> Rolled {
        let outer = std::mem::take(&mut self.frame);
        self.depth += 1;
        let cost = self.total(recipe);
        self.depth -= 1;
        let frame = std::mem::replace(&mut self.frame, outer);

        self.rolled += 1;
        let rolled = Rolled {
            cost,
            reach: frame.reach + 1,
        };
        if frame.complete {
            self.memo.insert(recipe.id.clone(), rolled);
        } else {
            tracing::debug!(recipe_id = %recipe.id, cost, "Sub-recipe cost cut short, not memoized");
        }
        self.frame.complete &= frame.complete;
        rolled
    }

    fn price_line(&mut self, ingredient: &Ingredient) -> CostLine {
        let (source, cost) = if ingredient.is_sub_recipe {
            self.price_sub_recipe(ingredient)
        } else {
            self.price_catalog(ingredient)
        };
        CostLine {
            ingredient: ingredient.name.clone(),
            quantity: ingredient.quantity,
            unit: ingredient.unit,
            source,
            cost,
        }
    }

    fn price_catalog(&self, ingredient: &Ingredient) -> (LineSource, Option<f64>) {
        let Some(entry) = self.engine.catalog.lookup(&ingredient.name) else {
            tracing::debug!(ingredient = %ingredient.name, "No catalog price, counting as zero");
            return unpriced(UnpricedReason::NoCatalogEntry);
        };

        let purchase_quantity =
            to_purchase_quantity(ingredient.quantity, ingredient.unit, entry.purchase_unit);
        let cost = purchase_quantity * entry.cost;
        (
            LineSource::Catalog {
                purchase_unit: entry.purchase_unit,
                unit_cost: entry.cost,
                purchase_quantity,
            },
            Some(cost),
        )
    }

    fn price_sub_recipe(&mut self, ingredient: &Ingredient) -> (LineSource, Option<f64>) {
        let engine = self.engine;
        let Some(sub) = ingredient
            .recipe_id
            .as_deref()
            .and_then(|id| engine.find_recipe(id))
        else {
            tracing::debug!(
                ingredient = %ingredient.name,
                recipe_id = ?ingredient.recipe_id,
                "Sub-recipe not found, counting as zero"
            );
            return unpriced(UnpricedReason::MissingSubRecipe);
        };

        let rolled = match self.memoized(sub) {
            Some(hit) => {
                tracing::trace!(recipe_id = %sub.id, cost = hit.cost, "Sub-recipe cost served from memo");
                hit
            }
            None if self.in_progress.contains(&sub.id) => {
                tracing::warn!(recipe_id = %sub.id, "Sub-recipe cycle detected, counting as zero");
                self.frame.complete = false;
                return unpriced(UnpricedReason::Cycle);
            }
            None if self.depth >= engine.max_depth => {
                tracing::warn!(
                    recipe_id = %sub.id,
                    max_depth = engine.max_depth,
                    "Sub-recipe nesting too deep, counting as zero"
                );
                self.frame.complete = false;
                return unpriced(UnpricedReason::TooDeep);
            }
            None => self.roll(sub),
        };
        self.frame.reach = self.frame.reach.max(rolled.reach);
        let batch_cost = rolled.cost;

        let yield_divisor = sub.yield_divisor();
        let yield_quantity =
            to_yield_quantity(ingredient.quantity, ingredient.unit, sub.yield_unit());
        let cost = batch_cost / yield_divisor * yield_quantity;
        (
            LineSource::SubRecipe {
                recipe_id: sub.id.clone(),
                batch_cost,
                yield_divisor,
                yield_quantity,
            },
            Some(cost),
        )
    }
}

fn unpriced(reason: UnpricedReason) -> (LineSource, Option<f64>) {
    (LineSource::Unpriced { reason }, None)
}
