//! Levenshtein Distance (Edit Distance)
//!
//! Reference: Levenshtein, V. I. (1966). "Binary codes capable of correcting
//!            deletions, insertions, and reversals"
//!
//! # Time Complexity
//! O(m × n) where m, n are string lengths in chars
//!
//! # Space Complexity
//! O(min(m, n)), two DP rows
//!
//! # Operations
//! - Insert: cost = 1
//! - Delete: cost = 1
//! - Substitute: cost = 1

/// Compute Levenshtein edit distance between two strings.
///
/// Wagner-Fischer with two rows, indexed over the shorter string.
/// Lengths are counted in `char`s, not bytes.
///
/// # Example
/// ```
/// use docsim_core::nlp::levenshtein::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("cat", "hat"), 1);
/// ```
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    distance_chars(&a_chars, &b_chars)
}

pub(crate) fn distance_chars(a: &[char], b: &[char]) -> usize {
    // Inner loop runs over the shorter string
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let m = short.len();

    let mut prev: Vec<usize> = (0..=m).collect();
    let mut curr: Vec<usize> = vec![0; m + 1];

    for (j, &lc) in long.iter().enumerate() {
        curr[0] = j + 1;

        for i in 1..=m {
            let cost = usize::from(short[i - 1] != lc);

            curr[i] = (prev[i] + 1)            // deletion
                .min(curr[i - 1] + 1)          // insertion
                .min(prev[i - 1] + cost);      // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[m]
}

/// Normalized edit-distance similarity in `[0, 1]`.
///
/// # Formula
/// `similarity = 1 - distance / max(len(a), len(b))`
///
/// Two empty strings have no characters to compare and score 0.0.
///
/// # Example
/// ```
/// use docsim_core::nlp::levenshtein::levenshtein_similarity;
///
/// assert_eq!(levenshtein_similarity("hello", "hello"), 1.0);
/// assert!((levenshtein_similarity("cat", "hat") - 2.0 / 3.0).abs() < 1e-12);
/// ```
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    similarity_chars(&a_chars, &b_chars)
}

pub(crate) fn similarity_chars(a: &[char], b: &[char]) -> f64 {
    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 0.0;
    }
    1.0 - distance_chars(a, b) as f64 / max_len as f64
}
