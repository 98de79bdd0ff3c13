//! Token-level distance and similarity
//!
//! All similarities are in `0.0..=1.0`. Lengths are counted in chars.

/// Boost applied when one token is a prefix of the other ("vikas" / "vikash")
pub const PREFIX_BOOST: f64 = 1.1;

/// Boost applied to normalized edit-distance similarity
pub const EDIT_BOOST: f64 = 1.05;

/// Similarity granted when a single letter matches a token's first letter
pub const INITIAL_MATCH_SCORE: f64 = 0.85;

/// Unit-cost Levenshtein distance (insert, delete, substitute)
#[inline]
pub fn levenshtein(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Similarity when one token is a prefix of the other, boosted and capped at 1.0
pub fn prefix_similarity(a: &str, b: &str) -> Option<f64> {
    if !(a.starts_with(b) || b.starts_with(a)) {
        return None;
    }
    let (shorter, longer) = ordered_lengths(a, b);
    if longer == 0 {
        return Some(1.0);
    }
    Some((shorter as f64 / longer as f64 * PREFIX_BOOST).min(1.0))
}

/// `1 - distance / max_len`, boosted and capped at 1.0
pub fn edit_similarity(a: &str, b: &str) -> f64 {
    let (_, longer) = ordered_lengths(a, b);
    if longer == 0 {
        return 1.0;
    }
    let similarity = 1.0 - levenshtein(a, b) as f64 / longer as f64;
    (similarity * EDIT_BOOST).min(1.0)
}

/// One side is a single letter and the other starts with it
pub fn is_initial_match(a: &str, b: &str) -> bool {
    let single_letter_prefix =
        |initial: &str, token: &str| initial.chars().count() == 1 && token.starts_with(initial);
    single_letter_prefix(a, b) || single_letter_prefix(b, a)
}

fn ordered_lengths(a: &str, b: &str) -> (usize, usize) {
    let (la, lb) = (a.chars().count(), b.chars().count());
    (la.min(lb), la.max(lb))
}
