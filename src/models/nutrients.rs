use std::fmt;
use std::ops::{Add, Index, Sub};

use serde::{Deserialize, Serialize};

/// The six nutrients tracked per food and per requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nutrient {
    Water,
    Energy,
    Protein,
    Fat,
    Carbohydrate,
    Fiber,
}

impl Nutrient {
    /// All nutrients, in catalog column order.
    pub const ALL: [Nutrient; 6] = [
        Nutrient::Water,
        Nutrient::Energy,
        Nutrient::Protein,
        Nutrient::Fat,
        Nutrient::Carbohydrate,
        Nutrient::Fiber,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Water => "Water",
            Nutrient::Energy => "Energy",
            Nutrient::Protein => "Protein",
            Nutrient::Fat => "Fat",
            Nutrient::Carbohydrate => "Carbohydrate",
            Nutrient::Fiber => "Fiber",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Nutrient::Water => "mL",
            Nutrient::Energy => "kcal",
            _ => "g",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A value for each of the six tracked nutrients.
///
/// The same shape carries a food's composition, a requirement, a running
/// total and a deficit. Deficits may be negative (surplus); every other use
/// is non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientVector {
    pub water: f64,
    pub energy: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbohydrate: f64,
    pub fiber: f64,
}

/// Nutrient targets for one (age bracket, trimester) pair.
pub type RequirementVector = NutrientVector;

/// Sum of nutrients across the foods in a session.
pub type NutrientTotals = NutrientVector;

/// Requirement minus totals; positive is a shortfall, negative a surplus.
pub type DeficitVector = NutrientVector;

impl NutrientVector {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn new(
        water: f64,
        energy: f64,
        protein: f64,
        fat: f64,
        carbohydrate: f64,
        fiber: f64,
    ) -> Self {
        Self {
            water,
            energy,
            protein,
            fat,
            carbohydrate,
            fiber,
        }
    }

    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Water => self.water,
            Nutrient::Energy => self.energy,
            Nutrient::Protein => self.protein,
            Nutrient::Fat => self.fat,
            Nutrient::Carbohydrate => self.carbohydrate,
            Nutrient::Fiber => self.fiber,
        }
    }

    /// (nutrient, value) pairs in `Nutrient::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        Nutrient::ALL.into_iter().map(move |n| (n, self.get(n)))
    }

    /// Apply `op` to each pair of fields.
    pub fn zip_with(&self, other: &NutrientVector, op: impl Fn(f64, f64) -> f64) -> Self {
        Self {
            water: op(self.water, other.water),
            energy: op(self.energy, other.energy),
            protein: op(self.protein, other.protein),
            fat: op(self.fat, other.fat),
            carbohydrate: op(self.carbohydrate, other.carbohydrate),
            fiber: op(self.fiber, other.fiber),
        }
    }
}

impl Index<Nutrient> for NutrientVector {
    type Output = f64;

    fn index(&self, nutrient: Nutrient) -> &f64 {
        match nutrient {
            Nutrient::Water => &self.water,
            Nutrient::Energy => &self.energy,
            Nutrient::Protein => &self.protein,
            Nutrient::Fat => &self.fat,
            Nutrient::Carbohydrate => &self.carbohydrate,
            Nutrient::Fiber => &self.fiber,
        }
    }
}

impl Add for NutrientVector {
    type Output = NutrientVector;

    fn add(self, other: NutrientVector) -> NutrientVector {
        self.zip_with(&other, |a, b| a + b)
    }
}

impl Sub for NutrientVector {
    type Output = NutrientVector;

    fn sub(self, other: NutrientVector) -> NutrientVector {
        self.zip_with(&other, |a, b| a - b)
    }
}

impl std::iter::Sum for NutrientVector {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutrientVector::zero(), |acc, v| acc + v)
    }
}

impl<'a> std::iter::Sum<&'a NutrientVector> for NutrientVector {
    fn sum<I: Iterator<Item = &'a NutrientVector>>(iter: I) -> Self {
        iter.fold(NutrientVector::zero(), |acc, v| acc + *v)
    }
}
