use std::collections::BTreeSet;

use crate::nutrition::constants::{
    LONG_LENGTH_RATIO, LONG_PARTIAL_SCALE, PARTIAL_LENGTH_RATIO, PARTIAL_SCALE, TOKEN_SCALE,
};

/// Scores how alike two strings are on a 0–100 scale.
pub trait SimilarityScorer {
    fn score(&self, query: &str, candidate: &str) -> u8;
}

impl<F> SimilarityScorer for F
where
    F: Fn(&str, &str) -> u8,
{
    fn score(&self, query: &str, candidate: &str) -> u8 {
        self(query, candidate)
    }
}

/// Weighted combination of whole-string, substring and token ratios over
/// indel (insert/delete) similarity.
///
/// Inputs are lowercased and stripped of punctuation first, so
/// "nasi putih" and "Nasi Putih" score 100. When one side is at least 1.5
/// times longer, substring and partial token ratios take over, discounted
/// by 0.9, or by 0.6 once the length ratio exceeds 8. Every component
/// score is rounded half-to-even before weighting.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedRatio;

impl SimilarityScorer for WeightedRatio {
    fn score(&self, query: &str, candidate: &str) -> u8 {
        let a = normalize(query);
        let b = normalize(candidate);
        if a.is_empty() || b.is_empty() {
            return 0;
        }

        let len_a = a.chars().count() as f64;
        let len_b = b.chars().count() as f64;
        let length_ratio = len_a.max(len_b) / len_a.min(len_b);

        let base = ratio(&a, &b);
        let best = if length_ratio < PARTIAL_LENGTH_RATIO {
            base.max(token_sort_ratio(&a, &b) * TOKEN_SCALE)
                .max(token_set_ratio(&a, &b) * TOKEN_SCALE)
        } else {
            let scale = if length_ratio > LONG_LENGTH_RATIO {
                LONG_PARTIAL_SCALE
            } else {
                PARTIAL_SCALE
            };
            base.max(partial_ratio(&a, &b) * scale)
                .max(partial_token_sort_ratio(&a, &b) * TOKEN_SCALE * scale)
                .max(partial_token_set_ratio(&a, &b) * TOKEN_SCALE * scale)
        };

        best.round_ties_even().clamp(0.0, 100.0) as u8
    }
}

/// Lowercase, turn punctuation into spaces and trim the ends.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Whole-string similarity, 0–100: `2 * lcs / (len_a + len_b)`, rounded.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    percent(indel_similarity(&a, &b))
}

/// Best similarity of the shorter string against any equally long window of
/// the longer one.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return 0.0;
    }

    let mut best = 0.0_f64;
    for window in long.windows(short.len()) {
        best = best.max(indel_similarity(&short, window));
        if best >= 1.0 {
            break;
        }
    }
    percent(best)
}

/// Similarity after sorting each string's words.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Substring similarity after sorting each string's words.
pub fn partial_token_sort_ratio(a: &str, b: &str) -> f64 {
    partial_ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Similarity of the shared words against each side's full word set.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    token_set_with(a, b, ratio)
}

/// Like [`token_set_ratio`] but each pair is compared by substring.
pub fn partial_token_set_ratio(a: &str, b: &str) -> f64 {
    token_set_with(a, b, partial_ratio)
}

fn token_set_with(a: &str, b: &str, compare: fn(&str, &str) -> f64) -> f64 {
    let set_a: BTreeSet<&str> = a.split_whitespace().collect();
    let set_b: BTreeSet<&str> = b.split_whitespace().collect();

    let common = join(set_a.intersection(&set_b));
    let only_a = join(set_a.difference(&set_b));
    let only_b = join(set_b.difference(&set_a));

    let with_a = format!("{common} {only_a}").trim().to_string();
    let with_b = format!("{common} {only_b}").trim().to_string();

    compare(&common, &with_a)
        .max(compare(&common, &with_b))
        .max(compare(&with_a, &with_b))
}

/// `2 * lcs / (len_a + len_b)`, i.e. one minus the normalized indel distance.
fn indel_similarity(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    (2 * longest_common_subsequence(a, b)) as f64 / total as f64
}

fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut cur = vec![0usize; b.len() + 1];
    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            cur[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(cur[j])
            };
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[b.len()]
}

fn percent(similarity: f64) -> f64 {
    (similarity * 100.0).round_ties_even()
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn join<'s, 't: 's>(tokens: impl Iterator<Item = &'s &'t str>) -> String {
    tokens.copied().collect::<Vec<_>>().join(" ")
}
