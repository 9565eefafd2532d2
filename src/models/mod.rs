pub mod demographics;
pub mod food;
pub mod nutrients;

pub use demographics::{AgeBracket, Trimester};
pub use food::{FoodRecord, RawFoodRecord, ResolvedFood, StoredValue};
pub use nutrients::{DeficitVector, Nutrient, NutrientTotals, NutrientVector, RequirementVector};
