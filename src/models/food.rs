use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::{NutritionError, Result};
use crate::models::nutrients::{Nutrient, NutrientVector};

/// A catalog entry: a unique food name and its composition.
///
/// Only constructed through validation, so every field is a finite,
/// non-negative number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodRecord {
    name: String,
    nutrients: NutrientVector,
}

impl FoodRecord {
    /// Build a record, rejecting a blank name or any unusable nutrient value.
    pub fn new(name: impl Into<String>, nutrients: NutrientVector) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(NutritionError::DataIntegrity {
                food: name,
                field: "name".to_string(),
                value: String::new(),
            });
        }

        for (nutrient, value) in nutrients.iter() {
            if !is_valid_amount(value) {
                return Err(integrity_error(&name, nutrient, value.to_string()));
            }
        }

        Ok(Self { name, nutrients })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nutrients(&self) -> &NutrientVector {
        &self.nutrients
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        let n = &self.nutrients;
        format!(
            "{}: water {} energy {} protein {} fat {} carbs {} fiber {}",
            self.name, n.water, n.energy, n.protein, n.fat, n.carbohydrate, n.fiber
        )
    }
}

/// A catalog record chosen for a session, with the text that selected it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedFood {
    pub record: FoodRecord,
    /// What the user typed.
    pub query: String,
    /// Similarity score of the match, 0–100.
    pub score: u8,
}

impl ResolvedFood {
    pub fn new(record: FoodRecord, query: impl Into<String>, score: u8) -> Self {
        Self {
            record,
            query: query.into(),
            score,
        }
    }

    pub fn name(&self) -> &str {
        self.record.name()
    }

    pub fn nutrients(&self) -> &NutrientVector {
        self.record.nutrients()
    }
}

/// A nutrient cell as stored in a catalog file, before coercion.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum StoredValue {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl StoredValue {
    /// Coerce to a finite, non-negative amount. On failure returns the
    /// offending value rendered as text.
    pub fn coerce(&self) -> std::result::Result<f64, String> {
        let parsed = match self {
            StoredValue::Number(n) => *n,
            StoredValue::Text(s) => s.trim().parse::<f64>().map_err(|_| s.clone())?,
            StoredValue::Missing => return Err(String::new()),
        };

        if is_valid_amount(parsed) {
            Ok(parsed)
        } else {
            Err(parsed.to_string())
        }
    }
}

impl<'de> Deserialize<'de> for StoredValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct StoredValueVisitor;

        impl<'de> Visitor<'de> for StoredValueVisitor {
            type Value = StoredValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number or numeric text")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<StoredValue, E> {
                Ok(StoredValue::Number(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<StoredValue, E> {
                Ok(StoredValue::Number(v as f64))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<StoredValue, E> {
                Ok(StoredValue::Number(v as f64))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<StoredValue, E> {
                Ok(StoredValue::Text(v.to_string()))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<StoredValue, E> {
                if v.trim().is_empty() {
                    Ok(StoredValue::Missing)
                } else {
                    Ok(StoredValue::Text(v.to_string()))
                }
            }

            fn visit_unit<E: de::Error>(self) -> std::result::Result<StoredValue, E> {
                Ok(StoredValue::Missing)
            }

            fn visit_none<E: de::Error>(self) -> std::result::Result<StoredValue, E> {
                Ok(StoredValue::Missing)
            }
        }

        deserializer.deserialize_any(StoredValueVisitor)
    }
}

/// One row of a catalog file.
///
/// Accepts the Indonesian food composition table headers as well as
/// lowercase English names. Unknown columns (codes, minerals) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFoodRecord {
    #[serde(rename = "NAMA", alias = "nama", alias = "Nama", alias = "name", alias = "Name")]
    pub name: String,

    #[serde(rename = "AIR", alias = "air", alias = "water", default)]
    pub water: StoredValue,

    #[serde(rename = "ENERGI", alias = "energi", alias = "energy", default)]
    pub energy: StoredValue,

    #[serde(rename = "PROTEIN", alias = "protein", default)]
    pub protein: StoredValue,

    #[serde(rename = "LEMAK", alias = "lemak", alias = "fat", default)]
    pub fat: StoredValue,

    #[serde(
        rename = "KARBOHIDRAT",
        alias = "karbohidrat",
        alias = "KH",
        alias = "carbohydrate",
        default
    )]
    pub carbohydrate: StoredValue,

    #[serde(rename = "SERAT", alias = "serat", alias = "fiber", default)]
    pub fiber: StoredValue,
}

impl RawFoodRecord {
    /// Validate and coerce every nutrient cell into a typed record.
    pub fn into_record(self) -> Result<FoodRecord> {
        let name = self.name.trim().to_string();
        let field = |nutrient: Nutrient, value: &StoredValue| {
            value
                .coerce()
                .map_err(|raw| integrity_error(&name, nutrient, raw))
        };

        let nutrients = NutrientVector {
            water: field(Nutrient::Water, &self.water)?,
            energy: field(Nutrient::Energy, &self.energy)?,
            protein: field(Nutrient::Protein, &self.protein)?,
            fat: field(Nutrient::Fat, &self.fat)?,
            carbohydrate: field(Nutrient::Carbohydrate, &self.carbohydrate)?,
            fiber: field(Nutrient::Fiber, &self.fiber)?,
        };

        FoodRecord::new(name, nutrients)
    }
}

fn is_valid_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn integrity_error(food: &str, nutrient: Nutrient, value: String) -> NutritionError {
    NutritionError::DataIntegrity {
        food: food.to_string(),
        field: nutrient.label().to_lowercase(),
        value,
    }
}
