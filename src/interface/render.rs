use crate::error::NutritionError;
use crate::models::{AgeBracket, Nutrient, ResolvedFood, Trimester};
use crate::nutrition::{DeficitReport, RequirementEntry, Resolution};

/// User-facing message for a recoverable error.
pub fn describe_error(err: &NutritionError) -> String {
    match err {
        NutritionError::FoodNotFound(name) => {
            format!("'{}' was not found in the food database.", name)
        }
        NutritionError::LowConfidenceMatch {
            query,
            best_match,
            score,
        } => format!(
            "No close match for '{}' (nearest was '{}' at {}%). Check the spelling or try another name.",
            query, best_match, score
        ),
        NutritionError::InvalidInput(msg) => format!("Invalid input: {}", msg),
        NutritionError::EmptySession => {
            "No foods added yet. Add at least one food before calculating.".to_string()
        }
        other => other.to_string(),
    }
}

/// Display the foods in a session, numbered from 1.
pub fn display_food_list(foods: &[ResolvedFood]) {
    if foods.is_empty() {
        println!("No foods added yet.");
        return;
    }

    println!();
    println!("=== Foods eaten ({} items) ===", foods.len());
    println!();

    let max_name_len = foods.iter().map(|f| f.name().len()).max().unwrap_or(10);

    for (i, food) in foods.iter().enumerate() {
        let n = food.nutrients();
        println!(
            "{:>3}. {:<width$}  {:>6.0} kcal  P:{:.1} F:{:.1} C:{:.1} Fb:{:.1}  (from '{}', {}%)",
            i + 1,
            food.name(),
            n.energy,
            n.protein,
            n.fat,
            n.carbohydrate,
            n.fiber,
            food.query,
            food.score,
            width = max_name_len
        );
    }

    println!();
}

/// Display totals, requirement and gap side by side.
pub fn display_report(report: &DeficitReport) {
    println!();
    println!("=== Nutrient Gap ===");
    println!("Age group: {}", report.age_label);
    println!("Trimester: {}", report.trimester_label);
    println!("Foods counted: {}", report.food_count);
    println!();

    println!(
        "{:<14} {:>10} {:>10} {:>11} {:>9}",
        "Nutrient", "Eaten", "Needed", "Gap", "Covered"
    );
    println!("{}", "-".repeat(58));

    for nutrient in Nutrient::ALL {
        println!(
            "{:<14} {:>10.1} {:>10.1} {:>11} {:>8.0}%",
            format!("{} ({})", nutrient.label(), nutrient.unit()),
            report.totals[nutrient],
            report.requirement[nutrient],
            format_gap(report.deficit[nutrient]),
            report.coverage_percent(nutrient)
        );
    }

    println!();

    let surpluses = report.surpluses();
    if surpluses.is_empty() {
        println!("No nutrient is above the daily need.");
    } else {
        let list: Vec<String> = surpluses
            .iter()
            .map(|(n, v)| format!("{} by {:.1} {}", n.label(), v, n.unit()))
            .collect();
        println!("Above the daily need: {}", list.join(", "));
    }
    println!();
}

/// Positive gaps are shortfalls; surpluses are shown with a leading minus.
pub fn format_gap(value: f64) -> String {
    if value > 0.0 {
        format!("+{:.1}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Display requirement rows, optionally filtered.
pub fn display_requirements<I>(entries: I)
where
    I: IntoIterator<Item = (AgeBracket, Trimester, RequirementEntry)>,
{
    println!();
    println!(
        "{:<15} {:<12} {:>8} {:>8} {:>8} {:>6} {:>8} {:>6}",
        "Age", "Trimester", "Water", "Energy", "Protein", "Fat", "Carbs", "Fiber"
    );
    println!("{}", "-".repeat(78));

    for (_, _, entry) in entries {
        let r = &entry.requirement;
        println!(
            "{:<15} {:<12} {:>8.0} {:>8.0} {:>8.1} {:>6.1} {:>8.1} {:>6.1}",
            entry.age_label,
            entry.trimester_label,
            r.water,
            r.energy,
            r.protein,
            r.fat,
            r.carbohydrate,
            r.fiber
        );
    }
    println!();
}

/// Suffix for a candidate whose score would not be accepted on its own.
pub fn threshold_marker(score: u8, min_score: u8) -> &'static str {
    if score >= min_score { "" } else { "  (below threshold)" }
}

/// One line of a suggestion picker: name, score and threshold marker.
pub fn format_suggestion(suggestion: &Resolution, min_score: u8) -> String {
    format!(
        "{} ({}%){}",
        suggestion.name,
        suggestion.score,
        threshold_marker(suggestion.score, min_score)
    )
}

/// Display candidate names with their scores.
pub fn display_suggestions(query: &str, suggestions: &[Resolution], min_score: u8) {
    if suggestions.is_empty() {
        println!("No candidates for '{}'.", query);
        return;
    }

    println!("Closest names for '{}':", query);
    for s in suggestions {
        println!("  {:>3}%  {}{}", s.score, s.name, threshold_marker(s.score, min_score));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_gap_sign() {
        assert_eq!(format_gap(12.34), "+12.3");
        assert_eq!(format_gap(-5.0), "-5.0");
        assert_eq!(format_gap(0.0), "0.0");
    }

    #[test]
    fn test_suggestion_below_threshold_is_marked() {
        let near = Resolution {
            name: "Tempe Kedelai Murni".to_string(),
            score: 86,
        };
        let far = Resolution {
            name: "Nasi Goreng".to_string(),
            score: 58,
        };
        assert_eq!(format_suggestion(&near, 60), "Tempe Kedelai Murni (86%)");
        assert_eq!(
            format_suggestion(&far, 60),
            "Nasi Goreng (58%)  (below threshold)"
        );
        assert_eq!(format_suggestion(&far, 50), "Nasi Goreng (58%)");
    }

    #[test]
    fn test_low_confidence_message_differs_from_not_found() {
        let low = describe_error(&NutritionError::LowConfidenceMatch {
            query: "nsi".to_string(),
            best_match: "Nasi Putih".to_string(),
            score: 40,
        });
        let missing = describe_error(&NutritionError::FoodNotFound("nsi".to_string()));
        assert!(low.contains("spelling"));
        assert!(missing.contains("not found"));
        assert_ne!(low, missing);
    }
}
