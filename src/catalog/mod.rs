mod loader;
mod store;

pub use loader::load_catalog;
pub use store::{FoodCatalog, FoodLookup};
