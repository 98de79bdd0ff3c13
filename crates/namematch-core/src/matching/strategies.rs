//! Scoring tiers
//!
//! Each tier inspects the two prepared names and either claims the pair or
//! passes. The engine tries them in order; the alignment tier always answers.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::distance::{edit_similarity, is_initial_match, prefix_similarity, INITIAL_MATCH_SCORE};
use crate::normalize::{is_single_letter, normalize_initial_token, PreparedName};

pub const EXACT_SCORE: u8 = 100;
pub const SWAPPED_SCORE: u8 = 99;

/// Subset scores when a full given token is shared, by token-count difference
pub const SUBSET_SAME_COUNT_SCORE: u8 = 99;
pub const SUBSET_ONE_EXTRA_SCORE: u8 = 94;
pub const SUBSET_SCORE: u8 = 90;

/// Scale for subsets that overlap only on initials
pub const INITIALS_SUBSET_SCALE: f64 = 60.0;

pub const COVERAGE_WEIGHT: f64 = 0.6;
pub const PRECISION_WEIGHT: f64 = 0.4;

/// Alignment scores at or above this need an exact match to stand
pub const ALIGNMENT_CEILING: u8 = 98;
pub const ALIGNMENT_CLAMP: u8 = 95;

/// Tier that produced a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// One side had no tokens left after normalization
    Empty,
    Exact,
    /// Same tokens in a different order
    Swapped,
    /// One side's tokens are all contained in the other
    Subset,
    /// Greedy token alignment fallback
    Alignment,
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Exact => write!(f, "exact"),
            Self::Swapped => write!(f, "swapped"),
            Self::Subset => write!(f, "subset"),
            Self::Alignment => write!(f, "alignment"),
        }
    }
}

/// Score claimed by a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierMatch {
    pub score: u8,
    pub tier: MatchTier,
}

impl TierMatch {
    fn new(score: u8, tier: MatchTier) -> Self {
        Self { score, tier }
    }
}

/// Normalized strings are identical (score: 100)
#[inline]
pub fn exact_match(input: &PreparedName, given: &PreparedName) -> Option<TierMatch> {
    (input.normalized == given.normalized).then(|| TierMatch::new(EXACT_SCORE, MatchTier::Exact))
}

/// Same token multiset once packed initials are put in canonical order
pub fn is_swapped_match(a: &[String], b: &[String]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    sorted_initial_keys(a) == sorted_initial_keys(b)
}

/// Token reordering (score: 99)
#[inline]
pub fn swapped_match(input: &PreparedName, given: &PreparedName) -> Option<TierMatch> {
    is_swapped_match(&input.tokens, &given.tokens)
        .then(|| TierMatch::new(SWAPPED_SCORE, MatchTier::Swapped))
}

/// Token subset in either direction (score: 90-99, or scaled when only
/// initials are shared)
pub fn subset_match(input: &PreparedName, given: &PreparedName) -> Option<TierMatch> {
    if input.is_empty() || given.is_empty() {
        return None;
    }

    let given_in_input = given.tokens.iter().all(|t| input.contains(t));
    let input_in_given = input.tokens.iter().all(|t| given.contains(t));
    if !given_in_input && !input_in_given {
        return None;
    }

    let longer = input.tokens.len().max(given.tokens.len());
    let shorter = input.tokens.len().min(given.tokens.len());

    let score = if has_full_token_match(input, given) {
        match longer - shorter {
            0 => SUBSET_SAME_COUNT_SCORE,
            1 => SUBSET_ONE_EXTRA_SCORE,
            _ => SUBSET_SCORE,
        }
    } else {
        to_percentage(shorter as f64 / longer as f64 * INITIALS_SUBSET_SCALE)
    };

    Some(TierMatch::new(score, MatchTier::Subset))
}

/// Greedy token alignment (score: 0-95 unless the names are identical)
///
/// Given tokens are visited in order; each takes the best-scoring input token
/// not yet taken. First come, first served: this is not an optimal
/// assignment, and the weighting makes the result depend on which name is the
/// input.
pub fn alignment_match(input: &PreparedName, given: &PreparedName) -> TierMatch {
    if input.is_empty() || given.is_empty() {
        return TierMatch::new(0, MatchTier::Alignment);
    }

    let mut used = vec![false; input.tokens.len()];
    let mut matched_score = 0.0;

    for g in &given.tokens {
        let mut best_score = 0.0;
        let mut best_index = None;

        for (idx, i) in input.tokens.iter().enumerate() {
            if used[idx] {
                continue;
            }
            let similarity = token_similarity(i, g);
            if similarity > best_score {
                best_score = similarity;
                best_index = Some(idx);
            }
        }

        if let Some(idx) = best_index {
            trace!(given = %g, input = %input.tokens[idx], score = best_score, "aligned token");
            used[idx] = true;
            matched_score += best_score;
        } else {
            trace!(given = %g, "no alignment candidate");
        }
    }

    let coverage = matched_score / input.tokens.len() as f64;
    let precision = matched_score / given.tokens.len() as f64;
    let blended = coverage * COVERAGE_WEIGHT + precision * PRECISION_WEIGHT;
    let mut score = to_percentage(blended * 100.0);

    if score >= ALIGNMENT_CEILING && input.normalized != given.normalized {
        score = ALIGNMENT_CLAMP;
    }

    TierMatch::new(score, MatchTier::Alignment)
}

/// Best of prefix, edit-distance and initial-letter similarity for a pair
pub fn token_similarity(input_token: &str, given_token: &str) -> f64 {
    let prefix = prefix_similarity(input_token, given_token).unwrap_or(0.0);
    let edit = edit_similarity(input_token, given_token);
    let initial = if is_initial_match(input_token, given_token) {
        INITIAL_MATCH_SCORE
    } else {
        0.0
    };
    prefix.max(edit).max(initial)
}

/// Some given token longer than one letter appears verbatim in the input
pub fn has_full_token_match(input: &PreparedName, given: &PreparedName) -> bool {
    given
        .tokens
        .iter()
        .any(|t| !is_single_letter(t) && input.contains(t))
}

fn sorted_initial_keys(tokens: &[String]) -> String {
    let mut keys: Vec<String> = tokens.iter().map(|t| normalize_initial_token(t)).collect();
    keys.sort();
    keys.join(" ")
}

fn to_percentage(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}
