//! NameMatcher - tier chain, global caps and match results

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::strategies::{self, MatchTier, TierMatch};
use crate::classify::Remark;
use crate::normalize::PreparedName;

/// Ceiling for pairs where one side is bare initials against a spelled-out
/// name, or both are spelled out without sharing a full token
pub const PARTIAL_NAME_CAP: u8 = 65;

/// Outcome of comparing two names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Input name exactly as the caller passed it
    pub input_name: String,
    /// Given name exactly as the caller passed it
    pub given_name: String,
    /// 0-100
    pub percentage: u8,
    pub remark: Remark,
}

impl MatchResult {
    /// Whether the percentage reaches `threshold`
    pub fn is_match(&self, threshold: u8) -> bool {
        self.percentage >= threshold
    }
}

/// Final score with the tier that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierScore {
    pub score: u8,
    pub tier: MatchTier,
    /// A global cap lowered the tier's score
    pub capped: bool,
}

/// Compares names against a prepared input name.
///
/// Holds no state beyond the prepared input, so a matcher can be shared
/// freely across threads.
#[derive(Debug, Clone)]
pub struct NameMatcher {
    input_name: String,
    input: PreparedName,
}

impl NameMatcher {
    pub fn new(input_name: &str) -> Self {
        Self {
            input_name: input_name.to_string(),
            input: PreparedName::new(input_name),
        }
    }

    /// The input name after normalization and tokenization
    pub fn prepared(&self) -> &PreparedName {
        &self.input
    }

    pub fn compare(&self, given_name: &str) -> MatchResult {
        let given = PreparedName::new(given_name);
        let scored = score_names(&self.input, &given);

        MatchResult {
            input_name: self.input_name.clone(),
            given_name: given_name.to_string(),
            percentage: scored.score,
            remark: Remark::from_score(scored.score),
        }
    }
}

/// Compare two free-text names. Never fails; empty names score 0.
pub fn match_names(input_name: &str, given_name: &str) -> MatchResult {
    NameMatcher::new(input_name).compare(given_name)
}

/// Run the tier chain on two prepared names, then the global caps
pub fn score_names(input: &PreparedName, given: &PreparedName) -> TierScore {
    if input.is_empty() || given.is_empty() {
        debug!(
            input = %input.normalized,
            given = %given.normalized,
            "empty token list, scoring 0"
        );
        return TierScore {
            score: 0,
            tier: MatchTier::Empty,
            capped: false,
        };
    }

    let TierMatch { score, tier } = select_tier(input, given);
    let capped_score = apply_caps(score, input, given);

    debug!(
        input = %input.normalized,
        given = %given.normalized,
        %tier,
        score = capped_score,
        capped = capped_score < score,
        "scored name pair"
    );

    TierScore {
        score: capped_score,
        tier,
        capped: capped_score < score,
    }
}

/// First tier to claim the pair wins
fn select_tier(input: &PreparedName, given: &PreparedName) -> TierMatch {
    strategies::exact_match(input, given)
        .or_else(|| strategies::swapped_match(input, given))
        .or_else(|| strategies::subset_match(input, given))
        .unwrap_or_else(|| strategies::alignment_match(input, given))
}

/// Cap scores where one side is reduced to initials against a full name, or
/// where two full names share no full token
pub fn apply_caps(score: u8, input: &PreparedName, given: &PreparedName) -> u8 {
    let input_has_full = input.has_full_token();
    let given_has_full = given.has_full_token();

    let initials_against_full =
        (input_has_full && given.all_initials()) || (given_has_full && input.all_initials());
    let no_shared_full_token = input_has_full
        && given_has_full
        && !strategies::has_full_token_match(input, given);

    if initials_against_full || no_shared_full_token {
        score.min(PARTIAL_NAME_CAP)
    } else {
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_match_result_echoes_original_names() {
        let result = match_names("  Dr. VIKASH Yadav", "vikash yadav");
        assert_eq!(
            result,
            MatchResult {
                input_name: "  Dr. VIKASH Yadav".to_string(),
                given_name: "vikash yadav".to_string(),
                percentage: 100,
                remark: Remark::ExactMatch,
            }
        );
    }

    #[test]
    fn test_score_names_reports_tier() {
        let input = PreparedName::new("Vikash Yadav Luniwal");

        let scored = score_names(&input, &PreparedName::new("Vikash Luniwal Yadav"));
        assert_eq!(scored.tier, MatchTier::Swapped);
        assert_eq!(scored.score, 99);

        let scored = score_names(&input, &PreparedName::new("Vikash Yadav"));
        assert_eq!(scored.tier, MatchTier::Subset);
        assert_eq!(scored.score, 94);

        let scored = score_names(&input, &PreparedName::new("Vikash Y L"));
        assert_eq!(scored.tier, MatchTier::Alignment);
        assert_eq!(scored.score, 90);
        assert!(!scored.capped);
    }

    #[test]
    fn test_empty_short_circuits() {
        let scored = score_names(&PreparedName::new(""), &PreparedName::new(""));
        assert_eq!(
            scored,
            TierScore {
                score: 0,
                tier: MatchTier::Empty,
                capped: false,
            }
        );
        // honorific-only names are empty after normalization
        assert_eq!(match_names("Dr", "Vikash").percentage, 0);
    }

    #[test]
    fn test_initials_against_full_name_capped() {
        let scored = score_names(&PreparedName::new("Vikash Yadav"), &PreparedName::new("V Y"));
        assert_eq!(scored.tier, MatchTier::Alignment);
        assert_eq!(scored.score, 65);
        assert!(scored.capped);
    }

    #[test]
    fn test_no_shared_full_token_capped() {
        // vikas/vikash 0.917 + yadva/yadav 0.63 would be 77
        let scored = score_names(
            &PreparedName::new("Vikash Yadav"),
            &PreparedName::new("Vikas Yadva"),
        );
        assert_eq!(scored.score, 65);
        assert!(scored.capped);
    }

    #[test]
    fn test_apply_caps_leaves_low_scores() {
        let input = PreparedName::new("Vikash Yadav");
        let given = PreparedName::new("V Y");
        assert_eq!(apply_caps(40, &input, &given), 40);
        assert_eq!(apply_caps(90, &input, &given), 65);
        let given = PreparedName::new("Vikash Y");
        assert_eq!(apply_caps(90, &input, &given), 90);
    }

    #[test]
    fn test_matcher_reuses_prepared_input() {
        let matcher = NameMatcher::new("Mr. Vikash YL");
        assert_eq!(matcher.prepared().normalized, "vikash yl");
        assert_eq!(matcher.prepared().tokens, vec!["vikash", "y", "l"]);
        assert_eq!(matcher.compare("Vikash Y L").percentage, 99);
        assert_eq!(matcher.compare("Vikash Y L").remark, Remark::HighSimilarity);
    }

    #[test]
    fn test_is_match() {
        let result = match_names("Vikash Yadav Luniwal", "Vikash Yadav");
        assert!(result.is_match(90));
        assert!(!result.is_match(95));
    }
}
