use crate::models::{FoodRecord, NutrientTotals, ResolvedFood};

/// Per-nutrient totals over a session's foods. Empty input gives zeros.
pub fn sum_resolved(foods: &[ResolvedFood]) -> NutrientTotals {
    foods.iter().map(ResolvedFood::nutrients).sum()
}

/// Per-nutrient totals over bare catalog records.
pub fn sum_records<'a>(records: impl IntoIterator<Item = &'a FoodRecord>) -> NutrientTotals {
    records.into_iter().map(FoodRecord::nutrients).sum()
}
