//! Score classification
//!
//! ```text
//! 100      ExactMatch
//! 90..=99  HighSimilarity
//! 70..=89  PossibleMatch
//! 0..=69   LowMatch
//! ```

use serde::{Deserialize, Serialize};

const HIGH_SIMILARITY_MIN: u8 = 90;
const POSSIBLE_MATCH_MIN: u8 = 70;

/// Qualitative remark attached to a match percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Remark {
    #[serde(rename = "Low Match")]
    LowMatch,
    #[serde(rename = "Possible Match")]
    PossibleMatch,
    #[serde(rename = "High Similarity")]
    HighSimilarity,
    #[serde(rename = "Exact Match")]
    ExactMatch,
}

impl Remark {
    pub fn from_score(score: u8) -> Self {
        if score >= 100 {
            Self::ExactMatch
        } else if score >= HIGH_SIMILARITY_MIN {
            Self::HighSimilarity
        } else if score >= POSSIBLE_MATCH_MIN {
            Self::PossibleMatch
        } else {
            Self::LowMatch
        }
    }

    /// Human-readable label, also used as the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            Self::ExactMatch => "Exact Match",
            Self::HighSimilarity => "High Similarity",
            Self::PossibleMatch => "Possible Match",
            Self::LowMatch => "Low Match",
        }
    }
}

impl std::fmt::Display for Remark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(Remark::from_score(100), Remark::ExactMatch);
        assert_eq!(Remark::from_score(99), Remark::HighSimilarity);
        assert_eq!(Remark::from_score(90), Remark::HighSimilarity);
        assert_eq!(Remark::from_score(89), Remark::PossibleMatch);
        assert_eq!(Remark::from_score(70), Remark::PossibleMatch);
        assert_eq!(Remark::from_score(69), Remark::LowMatch);
        assert_eq!(Remark::from_score(0), Remark::LowMatch);
    }

    #[test]
    fn test_ordering_follows_strength() {
        assert!(Remark::ExactMatch > Remark::HighSimilarity);
        assert!(Remark::PossibleMatch > Remark::LowMatch);
    }

    #[test]
    fn test_display_and_serde_agree() {
        for remark in [
            Remark::ExactMatch,
            Remark::HighSimilarity,
            Remark::PossibleMatch,
            Remark::LowMatch,
        ] {
            let json = serde_json::to_string(&remark).unwrap();
            assert_eq!(json, format!("\"{}\"", remark));
        }
    }
}
