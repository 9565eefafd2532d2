use proptest::prelude::*;

use prenatal_nutrition_rs::models::{FoodRecord, Nutrient, NutrientVector, ResolvedFood};
use prenatal_nutrition_rs::nutrition::{compute_deficit, sum_resolved};

const TOLERANCE: f64 = 1e-6;

fn amount() -> impl Strategy<Value = f64> {
    0.0..5000.0_f64
}

fn food() -> impl Strategy<Value = ResolvedFood> {
    (amount(), amount(), amount(), amount(), amount(), amount()).prop_map(
        |(water, energy, protein, fat, carbohydrate, fiber)| {
            let nutrients = NutrientVector::new(water, energy, protein, fat, carbohydrate, fiber);
            ResolvedFood::new(FoodRecord::new("Food", nutrients).unwrap(), "food", 100)
        },
    )
}

fn close(a: &NutrientVector, b: &NutrientVector) -> bool {
    Nutrient::ALL
        .into_iter()
        .all(|n| (a[n] - b[n]).abs() <= TOLERANCE * (1.0 + a[n].abs()))
}

proptest! {
    #[test]
    fn sum_ignores_order(foods in prop::collection::vec(food(), 1..12)) {
        let mut reversed = foods.clone();
        reversed.reverse();
        prop_assert!(close(&sum_resolved(&foods), &sum_resolved(&reversed)));
    }

    #[test]
    fn sum_splits_at_any_point(foods in prop::collection::vec(food(), 1..12), cut in 0usize..12) {
        let cut = cut.min(foods.len());
        let (left, right) = foods.split_at(cut);
        let grouped = sum_resolved(left) + sum_resolved(right);
        prop_assert!(close(&sum_resolved(&foods), &grouped));
    }

    #[test]
    fn deficit_is_exact_difference(foods in prop::collection::vec(food(), 0..8), req in food()) {
        let totals = sum_resolved(&foods);
        let requirement = *req.nutrients();
        let deficit = compute_deficit(&requirement, &totals);
        for n in Nutrient::ALL {
            prop_assert_eq!(deficit[n], requirement[n] - totals[n]);
        }
    }
}
