use crate::models::{AgeBracket, RequirementVector, Trimester};

/// Minimum similarity score (0–100) for a fuzzy match to be accepted.
pub const MATCH_THRESHOLD: u8 = 60;

/// Number of alternatives offered after a rejected match.
pub const SUGGESTION_LIMIT: usize = 5;

// ─────────────────────────────────────────────────────────────────────────────
// Scorer weights
// ─────────────────────────────────────────────────────────────────────────────

/// Length ratio at which substring matching takes over from whole-string.
pub const PARTIAL_LENGTH_RATIO: f64 = 1.5;

/// Length ratio beyond which substring matches are heavily discounted.
pub const LONG_LENGTH_RATIO: f64 = 8.0;

/// Discount for token-reordered comparisons.
pub const TOKEN_SCALE: f64 = 0.95;

/// Discount for substring comparisons of moderately different lengths.
pub const PARTIAL_SCALE: f64 = 0.9;

/// Discount for substring comparisons of very different lengths.
pub const LONG_PARTIAL_SCALE: f64 = 0.6;

// ─────────────────────────────────────────────────────────────────────────────
// Requirement table
// Indonesian recommended dietary allowance (AKG 2019) for women of each age
// bracket plus the per-trimester pregnancy addition.
// Units: water mL, energy kcal, everything else g.
// ─────────────────────────────────────────────────────────────────────────────

const fn req(
    water: f64,
    energy: f64,
    protein: f64,
    fat: f64,
    carbohydrate: f64,
    fiber: f64,
) -> RequirementVector {
    RequirementVector {
        water,
        energy,
        protein,
        fat,
        carbohydrate,
        fiber,
    }
}

/// Rows are age brackets (Young, Adult, MidAdult), columns are trimesters.
pub static REQUIREMENT_TABLE: [[RequirementVector; 3]; 3] = [
    [
        req(2450.0, 2280.0, 66.0, 72.3, 325.0, 32.0),
        req(2450.0, 2400.0, 75.0, 72.3, 340.0, 33.0),
        req(2450.0, 2400.0, 95.0, 72.3, 340.0, 33.0),
    ],
    [
        req(2650.0, 2430.0, 61.0, 67.3, 385.0, 35.0),
        req(2650.0, 2550.0, 70.0, 67.3, 400.0, 36.0),
        req(2650.0, 2550.0, 90.0, 67.3, 400.0, 36.0),
    ],
    [
        req(2650.0, 2330.0, 61.0, 62.3, 365.0, 33.0),
        req(2650.0, 2450.0, 70.0, 62.3, 380.0, 34.0),
        req(2650.0, 2450.0, 90.0, 62.3, 380.0, 34.0),
    ],
];

pub(crate) fn table_row(age: AgeBracket) -> usize {
    (age.code() - 1) as usize
}

pub(crate) fn table_column(trimester: Trimester) -> usize {
    (trimester.code() - 1) as usize
}
