mod manager;

pub use manager::NutritionSession;
