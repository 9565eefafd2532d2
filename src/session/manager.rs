use tracing::{debug, info};

use crate::catalog::FoodLookup;
use crate::error::{NutritionError, Result};
use crate::models::{AgeBracket, NutrientTotals, ResolvedFood, Trimester};
use crate::nutrition::scorer::SimilarityScorer;
use crate::nutrition::{DeficitReport, FoodResolver, requirements, sum_resolved};

/// The foods one user has added so far.
///
/// One value per user; the catalog and resolver it is driven with can be
/// shared between sessions.
#[derive(Debug, Clone, Default)]
pub struct NutritionSession {
    foods: Vec<ResolvedFood>,
}

impl NutritionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an already resolved food.
    pub fn add(&mut self, food: ResolvedFood) {
        info!(food = %food.name(), score = food.score, "added food to session");
        debug!(record = %food.record.debug_string(), "session food composition");
        self.foods.push(food);
    }

    /// Resolve `text` against the catalog, fetch the record and append it.
    ///
    /// Nothing is appended when resolution or lookup fails.
    pub fn add_by_name<C, S>(
        &mut self,
        text: &str,
        catalog: &C,
        resolver: &FoodResolver<S>,
    ) -> Result<&ResolvedFood>
    where
        C: FoodLookup + ?Sized,
        S: SimilarityScorer,
    {
        let resolution = resolver.resolve(text, catalog.all_names())?;
        let record = catalog.lookup(&resolution.name)?;

        self.add(ResolvedFood::new(record, text.trim(), resolution.score));
        Ok(&self.foods[self.foods.len() - 1])
    }

    /// Remove the food at `index` (0-based, in insertion order).
    pub fn remove(&mut self, index: usize) -> Result<ResolvedFood> {
        if index >= self.foods.len() {
            return Err(NutritionError::InvalidInput(format!(
                "no food at position {} (session has {})",
                index + 1,
                self.foods.len()
            )));
        }

        let removed = self.foods.remove(index);
        info!(food = %removed.name(), "removed food from session");
        Ok(removed)
    }

    /// Drop every food.
    pub fn clear(&mut self) {
        self.foods.clear();
    }

    pub fn foods(&self) -> &[ResolvedFood] {
        &self.foods
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    pub fn totals(&self) -> NutrientTotals {
        sum_resolved(&self.foods)
    }

    /// Build the deficit report for the selected bracket.
    ///
    /// Refuses an empty session: a deficit against nothing eaten tells the
    /// user nothing.
    pub fn report(&self, age: AgeBracket, trimester: Trimester) -> Result<DeficitReport> {
        if self.foods.is_empty() {
            return Err(NutritionError::EmptySession);
        }

        let entry = requirements::get(age, trimester);
        Ok(DeficitReport::build(&entry, self.totals(), self.foods.len()))
    }
}
