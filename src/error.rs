use thiserror::Error;

#[derive(Debug, Error)]
pub enum NutritionError {
    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("No confident match for '{query}' (closest: '{best_match}', score {score})")]
    LowConfidenceMatch {
        query: String,
        best_match: String,
        score: u8,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Catalog entry '{food}' has an unusable {field} value: '{value}'")]
    DataIntegrity {
        food: String,
        field: String,
        value: String,
    },

    #[error("No foods have been added to the session")]
    EmptySession,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl NutritionError {
    /// True for errors a user can fix by retyping or reselecting.
    pub fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            NutritionError::FoodNotFound(_)
                | NutritionError::LowConfidenceMatch { .. }
                | NutritionError::InvalidInput(_)
                | NutritionError::EmptySession
        )
    }
}

pub type Result<T> = std::result::Result<T, NutritionError>;
