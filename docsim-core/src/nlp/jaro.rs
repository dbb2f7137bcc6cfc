//! Jaro and Jaro-Winkler Similarity
//!
//! Reference: Winkler, W. E. (1990). "String Comparator Metrics and Enhanced
//!            Decision Rules in the Fellegi-Sunter Model of Record Linkage"
//!
//! # Time Complexity
//! O(m × w) where w is the matching window
//!
//! # Space Complexity
//! O(m + n)
//!
//! # Variant
//! - Matching window: `max(floor(max_len / 2) - 1, 0)`
//! - The shorter string drives the greedy matching; on equal length the
//!   lexicographically smaller one does. Both scores are therefore symmetric.
//! - Transpositions are mismatched matched-pairs divided by two, kept
//!   fractional.
//! - The Winkler prefix bonus only applies once Jaro reaches
//!   [`WINKLER_BOOST_THRESHOLD`].

/// Standard Winkler scaling factor.
const SCALING_FACTOR: f64 = 0.1;

/// Longest common prefix that earns a bonus.
const MAX_PREFIX_LENGTH: usize = 4;

/// Jaro score below which no prefix bonus is given.
pub const WINKLER_BOOST_THRESHOLD: f64 = 0.7;

/// Outcome of the greedy character matching between two strings.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Matching {
    matches: usize,
    /// Half the number of out-of-order matched characters
    transpositions: f64,
    /// Common prefix length, capped at [`MAX_PREFIX_LENGTH`]
    prefix: usize,
}

fn matching(a: &[char], b: &[char]) -> Matching {
    let (short, long) = if a.len() < b.len() || (a.len() == b.len() && a <= b) {
        (a, b)
    } else {
        (b, a)
    };

    let window = (long.len() / 2).saturating_sub(1);
    let mut long_flags = vec![false; long.len()];
    let mut short_matched: Vec<char> = Vec::with_capacity(short.len());

    for (i, &c) in short.iter().enumerate() {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(long.len());

        for j in start..end {
            if long_flags[j] || long[j] != c {
                continue;
            }
            long_flags[j] = true;
            short_matched.push(c);
            break;
        }
    }

    let mismatched = long
        .iter()
        .zip(long_flags.iter())
        .filter(|&(_, &flag)| flag)
        .map(|(&c, _)| c)
        .zip(short_matched.iter())
        .filter(|(l, s)| l != *s)
        .count();

    let prefix = a
        .iter()
        .zip(b.iter())
        .take(MAX_PREFIX_LENGTH)
        .take_while(|(c1, c2)| c1 == c2)
        .count();

    Matching {
        matches: short_matched.len(),
        transpositions: mismatched as f64 / 2.0,
        prefix,
    }
}

fn jaro_from(a: &[char], b: &[char], m: &Matching) -> f64 {
    if m.matches == 0 {
        return 0.0;
    }
    let matches = m.matches as f64;
    (matches / a.len() as f64
        + matches / b.len() as f64
        + (matches - m.transpositions) / matches)
        / 3.0
}

pub(crate) fn jaro_winkler_chars(a: &[char], b: &[char]) -> f64 {
    if a == b {
        return 1.0;
    }
    let m = matching(a, b);
    let jaro = jaro_from(a, b, &m);
    if jaro < WINKLER_BOOST_THRESHOLD {
        return jaro;
    }
    jaro + m.prefix as f64 * SCALING_FACTOR * (1.0 - jaro)
}

/// Compute Jaro similarity between two strings.
///
/// `Jaro = (m/|s1| + m/|s2| + (m - t)/m) / 3` where m = matching characters
/// and t = transpositions. Identical strings (including two empty ones)
/// score 1.0.
///
/// # Example
/// ```
/// use docsim_core::nlp::jaro::jaro_similarity;
///
/// assert!(jaro_similarity("MARTHA", "MARHTA") > 0.94);
/// ```
pub fn jaro_similarity(s1: &str, s2: &str) -> f64 {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    if a == b {
        return 1.0;
    }
    jaro_from(&a, &b, &matching(&a, &b))
}

/// Jaro-Winkler similarity with prefix bonus.
///
/// `JW = Jaro + prefix_len × 0.1 × (1 - Jaro)` for `Jaro >= 0.7`,
/// plain Jaro otherwise.
///
/// # Example
/// ```
/// use docsim_core::nlp::jaro::{jaro_similarity, jaro_winkler_similarity};
///
/// let jaro = jaro_similarity("colour", "color");
/// let jw = jaro_winkler_similarity("colour", "color");
/// assert!(jw > jaro);
/// ```
pub fn jaro_winkler_similarity(s1: &str, s2: &str) -> f64 {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    jaro_winkler_chars(&a, &b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jaro_similarity() {
        // Identical strings → 1.0
        assert!((jaro_similarity("hello", "hello") - 1.0).abs() < 1e-9);

        // Empty strings
        assert!((jaro_similarity("", "") - 1.0).abs() < 1e-9);
        assert!(jaro_similarity("abc", "").abs() < 1e-9);

        // Classic examples from Jaro (1989)
        assert!((jaro_similarity("MARTHA", "MARHTA") - 0.944).abs() < 1e-3);
        assert!((jaro_similarity("DWAYNE", "DUANE") - 0.822).abs() < 1e-3);
        assert!((jaro_similarity("DIXON", "DICKSONX") - 0.767).abs() < 1e-3);
    }

    #[test]
    fn test_jaro_winkler_similarity() {
        assert!((jaro_winkler_similarity("MARTHA", "MARHTA") - 0.961).abs() < 1e-3);
        assert!((jaro_winkler_similarity("DWAYNE", "DUANE") - 0.840).abs() < 1e-3);
        assert!((jaro_winkler_similarity("DIXON", "DICKSONX") - 0.813).abs() < 1e-3);
    }

    #[test]
    fn test_no_boost_below_threshold() {
        // fox/fast share only "f": Jaro ~0.53, prefix bonus withheld
        let jaro = jaro_similarity("fox", "fast");
        assert!(jaro < WINKLER_BOOST_THRESHOLD);
        assert_eq!(jaro_winkler_similarity("fox", "fast"), jaro);
    }

    #[test]
    fn test_no_common_characters() {
        assert_eq!(jaro_winkler_similarity("quick", "fast"), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let pairs = [
            ("MARTHA", "MARHTA"),
            ("DWAYNE", "DUANE"),
            ("abcd", "badc"),
            ("colour", "color"),
            ("brown", "fox"),
        ];
        for (a, b) in pairs {
            assert_eq!(jaro_winkler_similarity(a, b), jaro_winkler_similarity(b, a));
        }
    }
}
