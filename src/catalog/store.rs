use std::collections::HashMap;

use tracing::warn;

use crate::error::{NutritionError, Result};
use crate::models::FoodRecord;

/// Read-only access to a food composition reference.
///
/// Implementations must hand out already-validated records; callers never
/// coerce values themselves.
pub trait FoodLookup {
    /// Every distinct food name, in a stable order.
    fn all_names(&self) -> &[String];

    /// Fetch a record by its exact catalog name.
    fn lookup(&self, exact_name: &str) -> Result<FoodRecord>;
}

/// In-memory food catalog keyed by exact name.
///
/// Immutable after construction, so one instance can be shared by any number
/// of sessions.
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    /// Names in first-seen order.
    names: Vec<String>,
    records: HashMap<String, FoodRecord>,
}

impl FoodCatalog {
    /// Build a catalog from validated records.
    ///
    /// Duplicate names keep the last record but the first position.
    pub fn from_records(records: Vec<FoodRecord>) -> Self {
        let mut names = Vec::with_capacity(records.len());
        let mut map: HashMap<String, FoodRecord> = HashMap::with_capacity(records.len());

        for record in records {
            let name = record.name().to_string();
            if map.insert(name.clone(), record).is_some() {
                warn!(food = %name, "duplicate catalog entry, keeping the later one");
            } else {
                names.push(name);
            }
        }

        Self {
            names,
            records: map,
        }
    }

    pub fn get(&self, exact_name: &str) -> Option<&FoodRecord> {
        self.records.get(exact_name)
    }

    pub fn contains(&self, exact_name: &str) -> bool {
        self.records.contains_key(exact_name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FoodLookup for FoodCatalog {
    fn all_names(&self) -> &[String] {
        &self.names
    }

    fn lookup(&self, exact_name: &str) -> Result<FoodRecord> {
        self.get(exact_name)
            .cloned()
            .ok_or_else(|| NutritionError::FoodNotFound(exact_name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutrientVector;

    fn record(name: &str, energy: f64) -> FoodRecord {
        FoodRecord::new(name, NutrientVector::new(50.0, energy, 1.0, 1.0, 10.0, 0.5)).unwrap()
    }

    #[test]
    fn test_lookup_is_exact() {
        let catalog = FoodCatalog::from_records(vec![record("Nasi Putih", 130.0)]);
        assert_eq!(catalog.lookup("Nasi Putih").unwrap().nutrients().energy, 130.0);
        assert!(matches!(
            catalog.lookup("nasi putih"),
            Err(NutritionError::FoodNotFound(_))
        ));
    }

    #[test]
    fn test_names_keep_load_order() {
        let catalog = FoodCatalog::from_records(vec![
            record("Tempe", 201.0),
            record("Bayam", 16.0),
            record("Nasi Putih", 130.0),
        ]);
        assert_eq!(catalog.all_names(), ["Tempe", "Bayam", "Nasi Putih"]);
    }

    #[test]
    fn test_duplicates_last_wins() {
        let catalog = FoodCatalog::from_records(vec![
            record("Tahu", 80.0),
            record("Tempe", 201.0),
            record("Tahu", 75.0),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.all_names(), ["Tahu", "Tempe"]);
        assert_eq!(catalog.lookup("Tahu").unwrap().nutrients().energy, 75.0);
    }
}
