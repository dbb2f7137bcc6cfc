//! Fuzzy Term-Vector Cosine Similarity
//!
//! Classic cosine similarity over term-frequency vectors, except that a
//! term's coordinate in a document is looked up by *fuzzy* equality
//! ([`is_similar`]) instead of exact key match. Misspellings and
//! near-duplicate spellings ("colour"/"color") therefore line up on the
//! same axis instead of being orthogonal.
//!
//! # Algorithm
//! For every term `t` in the union of both documents' terms:
//! ```text
//! f1 = matched_frequency(t, tf1)
//! f2 = matched_frequency(t, tf2)
//! dot  += f1 × f2
//! mag1 += f1²
//! mag2 += f2²
//! ```
//! `cosine = dot / sqrt(mag1 × mag2)`, or 0.0 when either magnitude is 0.
//!
//! The lookup against a term's *own* document is fuzzy as well, so a
//! document holding two near-duplicate spellings inflates its own
//! magnitude for each of them.
//!
//! # Time Complexity
//! O(U × (K1 + K2) × L²): every union term scans both frequency maps and
//! every comparison runs the O(L²) string scorers. The length pre-check in
//! [`is_similar`] discards most pairs cheaply.

use std::collections::BTreeSet;

use tracing::debug;

use super::hybrid::is_similar;
use super::term_frequency::TermFrequency;

/// Accumulated vector terms of one cosine computation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CosineBreakdown {
    /// Σ f1(t) × f2(t)
    pub dot: f64,
    /// Σ f1(t)²
    pub magnitude_1: f64,
    /// Σ f2(t)²
    pub magnitude_2: f64,
    /// Number of distinct terms across both documents
    pub union_size: usize,
}

impl CosineBreakdown {
    /// Final similarity, 0.0 for a zero vector on either side.
    pub fn similarity(&self) -> f64 {
        if self.magnitude_1 == 0.0 || self.magnitude_2 == 0.0 {
            return 0.0;
        }
        (self.dot / (self.magnitude_1 * self.magnitude_2).sqrt()).min(1.0)
    }
}

/// Count of the first key in `tf` that fuzzily equals `term`, else 0.
///
/// Keys are scanned in lexicographic order, so when several keys qualify
/// the smallest one wins. This is deterministic across runs.
///
/// # Example
/// ```
/// use docsim_core::nlp::cosine::matched_frequency;
/// use docsim_core::nlp::hybrid::MATCH_THRESHOLD;
/// use docsim_core::nlp::term_frequency::TermFrequency;
///
/// let tf = TermFrequency::from_tokens(["color", "color", "red"]);
/// assert_eq!(matched_frequency("colour", &tf, MATCH_THRESHOLD), 2);
/// assert_eq!(matched_frequency("blue", &tf, MATCH_THRESHOLD), 0);
/// ```
pub fn matched_frequency(term: &str, tf: &TermFrequency, threshold: f64) -> usize {
    tf.iter()
        .find(|(key, _)| is_similar(term, key, threshold))
        .map(|(_, &count)| count)
        .unwrap_or(0)
}

/// Accumulate dot product and magnitudes over the fuzzy-aligned union.
pub fn fuzzy_cosine_breakdown(
    tf1: &TermFrequency,
    tf2: &TermFrequency,
    threshold: f64,
) -> CosineBreakdown {
    let union: BTreeSet<&str> = tf1
        .terms()
        .chain(tf2.terms())
        .map(String::as_str)
        .collect();

    let mut breakdown = CosineBreakdown {
        union_size: union.len(),
        ..Default::default()
    };

    for term in union {
        let f1 = matched_frequency(term, tf1, threshold) as f64;
        let f2 = matched_frequency(term, tf2, threshold) as f64;

        breakdown.dot += f1 * f2;
        breakdown.magnitude_1 += f1 * f1;
        breakdown.magnitude_2 += f2 * f2;
    }

    debug!(
        union_size = breakdown.union_size,
        dot = breakdown.dot,
        magnitude_1 = breakdown.magnitude_1,
        magnitude_2 = breakdown.magnitude_2,
        "Fuzzy cosine accumulated"
    );

    breakdown
}

/// Fuzzy cosine similarity of two term-frequency maps, in `[0, 1]`.
///
/// # Example
/// ```
/// use docsim_core::nlp::cosine::fuzzy_cosine_similarity;
/// use docsim_core::nlp::hybrid::MATCH_THRESHOLD;
/// use docsim_core::nlp::term_frequency::TermFrequency;
///
/// let a = TermFrequency::from_tokens(["the", "colour", "red"]);
/// let b = TermFrequency::from_tokens(["the", "color", "red"]);
/// assert!((fuzzy_cosine_similarity(&a, &b, MATCH_THRESHOLD) - 1.0).abs() < 1e-9);
/// ```
pub fn fuzzy_cosine_similarity(tf1: &TermFrequency, tf2: &TermFrequency, threshold: f64) -> f64 {
    fuzzy_cosine_breakdown(tf1, tf2, threshold).similarity()
}
