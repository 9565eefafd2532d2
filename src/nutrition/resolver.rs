use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{NutritionError, Result};
use crate::nutrition::constants::MATCH_THRESHOLD;
use crate::nutrition::scorer::{SimilarityScorer, WeightedRatio};

/// Acceptance policy for fuzzy matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchPolicy {
    /// Lowest score (0–100) that still counts as a match.
    pub min_score: u8,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            min_score: MATCH_THRESHOLD,
        }
    }
}

/// A candidate name with its similarity score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub name: String,
    pub score: u8,
}

/// Maps free text onto the closest candidate name.
#[derive(Debug, Clone, Default)]
pub struct FoodResolver<S = WeightedRatio> {
    scorer: S,
    policy: MatchPolicy,
}

impl FoodResolver<WeightedRatio> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: SimilarityScorer> FoodResolver<S> {
    pub fn with_scorer(scorer: S, policy: MatchPolicy) -> Self {
        Self { scorer, policy }
    }

    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Highest-scoring candidate regardless of threshold.
    ///
    /// On equal scores the earliest candidate wins.
    pub fn best_match<T: AsRef<str>>(&self, query: &str, candidates: &[T]) -> Option<Resolution> {
        let mut best: Option<(&str, u8)> = None;
        for candidate in candidates {
            let name = candidate.as_ref();
            let score = self.scorer.score(query, name);
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((name, score));
            }
        }

        best.map(|(name, score)| Resolution {
            name: name.to_string(),
            score,
        })
    }

    /// Resolve user text to one candidate, enforcing the acceptance policy.
    ///
    /// Blank text is rejected before any scoring. A best score under the
    /// threshold is reported as `LowConfidenceMatch`, never accepted.
    pub fn resolve<T: AsRef<str>>(&self, user_text: &str, candidates: &[T]) -> Result<Resolution> {
        let query = user_text.trim();
        if query.is_empty() {
            return Err(NutritionError::InvalidInput(
                "food name must not be blank".to_string(),
            ));
        }

        let best = self
            .best_match(query, candidates)
            .ok_or_else(|| NutritionError::FoodNotFound(query.to_string()))?;

        if best.score < self.policy.min_score {
            warn!(
                query,
                closest = %best.name,
                score = best.score,
                "rejected low-confidence match"
            );
            return Err(NutritionError::LowConfidenceMatch {
                query: query.to_string(),
                best_match: best.name,
                score: best.score,
            });
        }

        debug!(query, matched = %best.name, score = best.score, "resolved food name");
        Ok(best)
    }

    /// Up to `limit` candidates, best first. Equal scores keep input order.
    pub fn top_matches<T: AsRef<str>>(
        &self,
        query: &str,
        candidates: &[T],
        limit: usize,
    ) -> Vec<Resolution> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<Resolution> = candidates
            .iter()
            .map(|c| Resolution {
                name: c.as_ref().to_string(),
                score: self.scorer.score(query, c.as_ref()),
            })
            .collect();

        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(limit);
        scored
    }
}
