#[macro_use]
extern crate assert_float_eq;

use prenatal_nutrition_rs::models::{
    AgeBracket, FoodRecord, NutrientVector, ResolvedFood, Trimester,
};
use prenatal_nutrition_rs::nutrition::{compute_deficit, requirements, sum_resolved};
use prenatal_nutrition_rs::NutritionError;

fn make_food(name: &str, energy: f64) -> ResolvedFood {
    let record = FoodRecord::new(name, NutrientVector::new(60.0, energy, 3.0, 1.0, 25.0, 0.5))
        .unwrap();
    ResolvedFood::new(record, name.to_lowercase(), 100)
}

#[test]
fn test_two_foods_against_fixed_requirement() {
    let foods = vec![make_food("Nasi Putih", 130.0), make_food("Mie Goreng", 200.0)];
    let totals = sum_resolved(&foods);
    assert_float_absolute_eq!(totals.energy, 330.0, 1e-9);

    let mut requirement = NutrientVector::zero();
    requirement.energy = 2200.0;

    let deficit = compute_deficit(&requirement, &totals);
    assert_float_absolute_eq!(deficit.energy, 1870.0, 1e-9);
}

#[test]
fn test_surplus_is_negative_not_clamped() {
    let foods = vec![make_food("Rendang", 2500.0)];
    let entry = requirements::get(AgeBracket::Young, Trimester::First);
    let deficit = compute_deficit(&entry.requirement, &sum_resolved(&foods));

    assert!(deficit.energy < 0.0);
    assert_float_absolute_eq!(deficit.energy, entry.requirement.energy - 2500.0, 1e-9);
}

#[test]
fn test_deficit_identity_for_every_table_entry() {
    let foods = vec![make_food("Nasi Putih", 130.0), make_food("Tahu", 80.0)];
    let totals = sum_resolved(&foods);

    for (_, _, entry) in requirements::all() {
        let deficit = compute_deficit(&entry.requirement, &totals);
        for (nutrient, value) in deficit.iter() {
            assert_eq!(value, entry.requirement[nutrient] - totals[nutrient]);
        }
    }
}

#[test]
fn test_requirement_lookup_is_reproducible() {
    let first = requirements::get(AgeBracket::Young, Trimester::First);
    let again = requirements::get(AgeBracket::Young, Trimester::First);
    assert_eq!(first, again);
    assert_eq!(first.requirement.energy, 2280.0);
    assert_eq!(first.requirement.fiber, 32.0);
}

#[test]
fn test_requirement_code_out_of_range() {
    let err = requirements::get_by_code(4, 1).unwrap_err();
    assert!(matches!(err, NutritionError::InvalidInput(_)));
}

#[test]
fn test_empty_totals_give_full_requirement_as_deficit() {
    let entry = requirements::get(AgeBracket::MidAdult, Trimester::Third);
    let deficit = compute_deficit(&entry.requirement, &sum_resolved(&[]));
    assert_eq!(deficit, entry.requirement);
}
