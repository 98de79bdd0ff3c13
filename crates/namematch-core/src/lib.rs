//! Name Matching Core
//!
//! Fuzzy comparison of human personal names typed as free text. Tolerates
//! case and spacing noise, honorific prefixes (`Dr`, `Shri`, ...), token
//! reordering, initials (`V. Y.`, `VY`, `V Y`) and small spelling slips.
//!
//! Every call is a pure function of its two arguments: no caches, no shared
//! state, safe to call from any thread.
//!
//! # Example
//!
//! ```rust
//! use namematch_core::{match_names, Remark};
//!
//! let result = match_names("Vikash Yadav Luniwal", "Vikash Y L");
//! assert_eq!(result.percentage, 90);
//! assert_eq!(result.remark, Remark::HighSimilarity);
//!
//! let result = match_names("Dr Vikash Yadav", "Vikash Yadav");
//! assert_eq!(result.remark, Remark::ExactMatch);
//! ```

pub mod classify;
pub mod distance;
pub mod matching;
pub mod normalize;

// Re-export main types at crate root
pub use classify::Remark;
pub use distance::{is_initial_match, levenshtein};
pub use matching::{match_names, score_names, MatchResult, MatchTier, NameMatcher, TierScore};
pub use normalize::{
    expand_combined_initials, merge_initials, normalize, normalize_initial_token, tokenize,
    PreparedName, HONORIFICS,
};
