//! Tiered Name Matching
//!
//! Tiers are tried in order; the first to claim a pair sets its score:
//!
//! 1. Exact normalized text (score: 100)
//! 2. Same tokens, any order (score: 99)
//! 3. Token subset in either direction (score: 90-99, or up to 60 when only
//!    initials overlap)
//! 4. Greedy token alignment with prefix, edit-distance and initial-letter
//!    similarity (score: 0-95)
//!
//! Global caps then hold the score at 65 when one side is bare initials
//! against a spelled-out name, or when two spelled-out names share no full
//! token.
//!
//! # Example
//!
//! ```rust
//! use namematch_core::matching::{match_names, Remark};
//!
//! let result = match_names("Vikash Yadav Luniwal", "Vikash Luniwal Yadav");
//! assert_eq!(result.percentage, 99);
//! assert_eq!(result.remark, Remark::HighSimilarity);
//! ```

mod engine;
mod strategies;

pub use crate::classify::Remark;
pub use engine::{
    apply_caps, match_names, score_names, MatchResult, NameMatcher, TierScore, PARTIAL_NAME_CAP,
};
pub use strategies::{
    alignment_match, exact_match, has_full_token_match, is_swapped_match, subset_match,
    swapped_match, token_similarity, MatchTier, TierMatch,
};
