//! Name normalization pipeline
//!
//! Turns a free-text personal name into a comparable form:
//!
//! 1. Lowercase, merge dotted initials (`"j. k."` -> `"jk"`), drop periods
//! 2. Collapse whitespace, drop honorific prefixes
//! 3. Split into tokens
//! 4. Expand packed consonant initials (`"yl"` -> `"y"`, `"l"`)
//!
//! Initials are merged before periods are stripped. Once the periods are
//! gone there is nothing left for the merger to recognise, so running
//! [`merge_initials`] on already-normalized text is a pass-through.

use serde::{Deserialize, Serialize};

/// Honorific prefixes dropped during normalization
pub const HONORIFICS: [&str; 7] = ["mr", "mrs", "ms", "miss", "shri", "smt", "dr"];

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Length bounds for a token read as packed initials ("yl", "jkr")
const PACKED_INITIALS_MIN: usize = 2;
const PACKED_INITIALS_MAX: usize = 4;

/// One side of a comparison after the full pipeline has run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparedName {
    /// Lowercased, initials-merged, period-free, honorific-free text
    pub normalized: String,
    /// Tokens of `normalized` with packed initials expanded
    pub tokens: Vec<String>,
}

impl PreparedName {
    /// Run normalization, tokenization and initial expansion on a raw name
    pub fn new(name: &str) -> Self {
        let normalized = normalize(name);
        let tokens = expand_combined_initials(&tokenize(&normalized));
        Self { normalized, tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether any token is longer than a single letter
    pub fn has_full_token(&self) -> bool {
        self.tokens.iter().any(|t| !is_single_letter(t))
    }

    /// Whether every token is a single letter
    pub fn all_initials(&self) -> bool {
        self.tokens.iter().all(|t| is_single_letter(t))
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }
}

/// Normalize a raw name.
///
/// Empty input yields an empty string. Punctuation other than periods,
/// digits and non-Latin characters are left alone.
pub fn normalize(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }

    let lowered = name.to_lowercase();
    let merged = merge_initials(&lowered);

    merged
        .replace('.', "")
        .split_whitespace()
        .filter(|word| !HONORIFICS.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Merge dotted initial pairs: `"j. k. singh"` -> `"jk singh"`.
///
/// Matches a single lowercase letter at a word boundary, a period, optional
/// whitespace, another single lowercase letter and a period. Scans left to
/// right; matches never overlap.
pub fn merge_initials(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len());

    let mut i = 0;
    while i < chars.len() {
        let at_boundary = i == 0 || !is_word_char(chars[i - 1]);
        if at_boundary {
            if let Some((pair, consumed)) = dotted_pair(&chars[i..]) {
                out.extend(pair);
                i += consumed;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }

    out
}

/// Split on single spaces, dropping empty pieces
pub fn tokenize(name: &str) -> Vec<String> {
    name.split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Replace each packed-initials token with its individual letters.
/// Applied once; the produced letters are not re-examined.
pub fn expand_combined_initials(tokens: &[String]) -> Vec<String> {
    let mut expanded = Vec::with_capacity(tokens.len());
    for token in tokens {
        if is_packed_initials(token) {
            expanded.extend(token.chars().map(String::from));
        } else {
            expanded.push(token.clone());
        }
    }
    expanded
}

/// Canonical key for unordered initials: `"ly"` and `"yl"` both become `"ly"`.
/// Tokens that are not packed initials come back unchanged.
pub fn normalize_initial_token(token: &str) -> String {
    if !is_packed_initials(token) {
        return token.to_string();
    }
    let mut letters: Vec<char> = token.chars().collect();
    letters.sort_unstable();
    letters.into_iter().collect()
}

/// 2-4 ASCII lowercase letters, none of them a vowel
pub fn is_packed_initials(token: &str) -> bool {
    (PACKED_INITIALS_MIN..=PACKED_INITIALS_MAX).contains(&token.len())
        && token.chars().all(|c| c.is_ascii_lowercase())
        && !token.chars().any(|c| VOWELS.contains(&c))
}

#[inline]
pub(crate) fn is_single_letter(token: &str) -> bool {
    token.chars().count() == 1
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Recognise `x.` + whitespace* + `y.` at the start of `chars`.
/// Returns the two letters and how many chars the pattern spans.
fn dotted_pair(chars: &[char]) -> Option<([char; 2], usize)> {
    let first = *chars.first()?;
    if !first.is_ascii_lowercase() || chars.get(1) != Some(&'.') {
        return None;
    }

    let mut j = 2;
    while chars.get(j).is_some_and(|c| c.is_whitespace()) {
        j += 1;
    }

    let second = *chars.get(j)?;
    if !second.is_ascii_lowercase() || chars.get(j + 1) != Some(&'.') {
        return None;
    }

    Some(([first, second], j + 2))
}
