//! Hybrid Token Similarity
//!
//! The single definition of "are these two tokens the same term". It blends
//! two complementary signals with fixed, equal weights:
//! - Jaro-Winkler: character order and shared prefixes
//! - Normalized Levenshtein: raw edit cost relative to length
//!
//! Both inputs are lower-cased first, and identical strings short-circuit
//! to 1.0. Both sub-scores are symmetric, so the blend is too.

use super::jaro::jaro_winkler_chars;
use super::levenshtein::similarity_chars;

/// Hybrid score at or above which two tokens count as the same term.
pub const MATCH_THRESHOLD: f64 = 0.75;

const W_JARO_WINKLER: f64 = 0.5;
const W_LEVENSHTEIN: f64 = 0.5;

/// Hybrid similarity between two strings, in `[0, 1]`.
///
/// `0.5 × jaro_winkler + 0.5 × (1 - levenshtein / max_len)`
///
/// # Example
/// ```
/// use docsim_core::nlp::hybrid::hybrid_similarity;
///
/// assert_eq!(hybrid_similarity("Cat", "cAT"), 1.0);
/// assert!(hybrid_similarity("colour", "color") > 0.75);
/// assert!(hybrid_similarity("quick", "fast") < 0.75);
/// ```
pub fn hybrid_similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    if a == b {
        return 1.0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    blend(&a_chars, &b_chars)
}

fn blend(a: &[char], b: &[char]) -> f64 {
    // Unreachable behind the equality short-circuit; kept as the defined
    // value for two empty inputs.
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }

    let jw_score = jaro_winkler_chars(a, b);
    let lev_score = similarity_chars(a, b);

    W_JARO_WINKLER * jw_score + W_LEVENSHTEIN * lev_score
}

/// Fuzzy term equality: `hybrid_similarity(a, b) >= threshold`.
///
/// Pairs whose length ratio rules out reaching the threshold are rejected
/// before any O(m × n) work. Edit distance is at least the length
/// difference, so the Levenshtein term is at most `min_len / max_len`;
/// with Jaro-Winkler at most 1 the blend cannot exceed
/// `0.5 + 0.5 × min_len / max_len`. The pre-check never changes the answer.
///
/// # Example
/// ```
/// use docsim_core::nlp::hybrid::{is_similar, MATCH_THRESHOLD};
///
/// assert!(is_similar("organisation", "organization", MATCH_THRESHOLD));
/// assert!(!is_similar("a", "the", MATCH_THRESHOLD));
/// ```
pub fn is_similar(a: &str, b: &str, threshold: f64) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    if a == b {
        return 1.0 >= threshold;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let (min_len, max_len) = if a_chars.len() <= b_chars.len() {
        (a_chars.len(), b_chars.len())
    } else {
        (b_chars.len(), a_chars.len())
    };
    if (min_len as f64) < (2.0 * threshold - 1.0) * max_len as f64 {
        return false;
    }

    blend(&a_chars, &b_chars) >= threshold
}
