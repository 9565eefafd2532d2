pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod nutrition;
pub mod session;

pub use catalog::{FoodCatalog, FoodLookup, load_catalog};
pub use error::{NutritionError, Result};
pub use models::{
    AgeBracket, DeficitVector, FoodRecord, Nutrient, NutrientTotals, NutrientVector,
    RequirementVector, ResolvedFood, Trimester,
};
pub use nutrition::{DeficitReport, FoodResolver, MatchPolicy, compute_deficit, sum_resolved};
pub use session::NutritionSession;
