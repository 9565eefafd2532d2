use serde::Serialize;

use crate::models::{DeficitVector, Nutrient, NutrientTotals, RequirementVector};
use crate::nutrition::requirements::RequirementEntry;

/// Requirement minus totals, field by field. Surpluses stay negative.
pub fn compute_deficit(requirement: &RequirementVector, totals: &NutrientTotals) -> DeficitVector {
    *requirement - *totals
}

/// Everything a front-end needs to present one calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeficitReport {
    pub age_label: &'static str,
    pub trimester_label: &'static str,
    pub food_count: usize,
    pub requirement: RequirementVector,
    pub totals: NutrientTotals,
    pub deficit: DeficitVector,
}

impl DeficitReport {
    pub fn build(entry: &RequirementEntry, totals: NutrientTotals, food_count: usize) -> Self {
        Self {
            age_label: entry.age_label,
            trimester_label: entry.trimester_label,
            food_count,
            requirement: entry.requirement,
            totals,
            deficit: compute_deficit(&entry.requirement, &totals),
        }
    }

    /// Nutrients still short of the requirement.
    pub fn shortfalls(&self) -> Vec<(Nutrient, f64)> {
        self.deficit.iter().filter(|(_, v)| *v > 0.0).collect()
    }

    /// Nutrients consumed beyond the requirement, as positive amounts.
    pub fn surpluses(&self) -> Vec<(Nutrient, f64)> {
        self.deficit
            .iter()
            .filter(|(_, v)| *v < 0.0)
            .map(|(n, v)| (n, -v))
            .collect()
    }

    /// Share of the requirement covered, clamped to 0–100 for display.
    pub fn coverage_percent(&self, nutrient: Nutrient) -> f64 {
        let needed = self.requirement[nutrient];
        if needed <= 0.0 {
            return 100.0;
        }
        (self.totals[nutrient] / needed * 100.0).clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgeBracket, NutrientVector, Trimester};
    use crate::nutrition::requirements;

    #[test]
    fn test_subtraction_per_field() {
        let req = NutrientVector::new(2000.0, 2200.0, 60.0, 70.0, 300.0, 30.0);
        let totals = NutrientVector::new(100.0, 330.0, 10.0, 80.0, 50.0, 2.0);
        let deficit = compute_deficit(&req, &totals);
        assert_eq!(deficit.energy, 1870.0);
        assert_eq!(deficit.water, 1900.0);
        // surplus is kept, not clamped
        assert_eq!(deficit.fat, -10.0);
    }

    #[test]
    fn test_report_splits_shortfall_and_surplus() {
        let entry = requirements::get(AgeBracket::Adult, Trimester::Second);
        let mut totals = NutrientVector::zero();
        totals.fat = entry.requirement.fat + 5.0;
        let report = DeficitReport::build(&entry, totals, 1);

        assert_eq!(report.surpluses(), vec![(Nutrient::Fat, 5.0)]);
        assert_eq!(report.shortfalls().len(), 5);
        assert_eq!(report.coverage_percent(Nutrient::Fat), 100.0);
        assert_eq!(report.coverage_percent(Nutrient::Energy), 0.0);
    }

    #[test]
    fn test_zero_deficit_is_neither() {
        let entry = requirements::get(AgeBracket::Young, Trimester::Third);
        let report = DeficitReport::build(&entry, entry.requirement, 3);
        assert!(report.shortfalls().is_empty());
        assert!(report.surpluses().is_empty());
        assert_eq!(report.deficit, NutrientVector::zero());
    }
}
