pub mod accumulator;
pub mod constants;
pub mod deficit;
pub mod requirements;
pub mod resolver;
pub mod scorer;

pub use accumulator::{sum_records, sum_resolved};
pub use constants::{MATCH_THRESHOLD, REQUIREMENT_TABLE, SUGGESTION_LIMIT};
pub use deficit::{DeficitReport, compute_deficit};
pub use requirements::RequirementEntry;
pub use resolver::{FoodResolver, MatchPolicy, Resolution};
pub use scorer::{SimilarityScorer, WeightedRatio};
