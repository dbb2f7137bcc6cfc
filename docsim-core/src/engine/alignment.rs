//! Token Alignment Reporting
//!
//! Explains a similarity score token by token:
//! - which tokens of one document found a fuzzy partner in the other
//!   (callers use this for highlighting)
//! - the single best partner of every token, with its score
//!   (callers use this for diagnostic export)

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::nlp::{hybrid_similarity, is_similar};

// ============================================================================
// Matched Tokens
// ============================================================================

/// Tokens of `tokens` that fuzzily equal at least one of `candidates`.
///
/// The result is a subset of `tokens` with duplicates removed.
///
/// # Example
/// ```
/// use docsim_core::engine::alignment::matched_tokens;
/// use docsim_core::nlp::MATCH_THRESHOLD;
///
/// let matched = matched_tokens(&["the", "colour", "red"], &["a", "color"], MATCH_THRESHOLD);
/// assert_eq!(matched.into_iter().collect::<Vec<_>>(), vec!["colour"]);
/// ```
pub fn matched_tokens<A, B>(tokens: &[A], candidates: &[B], threshold: f64) -> BTreeSet<String>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let candidates: BTreeSet<&str> = candidates.iter().map(AsRef::as_ref).collect();
    let mut matched = BTreeSet::new();

    for token in tokens {
        let token = token.as_ref();
        if matched.contains(token) {
            continue;
        }
        if candidates.iter().any(|candidate| is_similar(token, candidate, threshold)) {
            matched.insert(token.to_string());
        }
    }

    matched
}

// ============================================================================
// Best-Match Report
// ============================================================================

/// Highest-scoring partner of a token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestMatch {
    pub token: String,
    pub score: f64,
}

/// One row of the best-match report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenMatch {
    pub token: String,
    /// `None` when nothing scored above 0
    pub best: Option<BestMatch>,
}

impl fmt::Display for TokenMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.best {
            Some(best) => write!(f, "{} -> {} ({:.2})", self.token, best.token, best.score),
            None => write!(f, "{} -> No match", self.token),
        }
    }
}

/// Best partner in `candidates` for every distinct token of `tokens`.
///
/// Rows follow the first occurrence order of `tokens`; a repeated token is
/// reported once. Ties go to the earliest candidate. A token whose best
/// score is 0 (always the case for an empty candidate list) gets
/// `best: None`.
///
/// # Example
/// ```
/// use docsim_core::engine::alignment::best_matches;
///
/// let rows = best_matches(&["colour", "zzz"], &["color", "red"]);
/// assert_eq!(rows[0].best.as_ref().unwrap().token, "color");
/// assert!(rows[1].best.is_none());
/// ```
pub fn best_matches<A, B>(tokens: &[A], candidates: &[B]) -> Vec<TokenMatch>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut rows = Vec::new();

    for token in tokens {
        let token = token.as_ref();
        if !seen.insert(token) {
            continue;
        }

        let mut best: Option<BestMatch> = None;
        let mut max_score = 0.0;
        for candidate in candidates {
            let candidate = candidate.as_ref();
            let score = hybrid_similarity(token, candidate);
            if score > max_score {
                max_score = score;
                best = Some(BestMatch {
                    token: candidate.to_string(),
                    score,
                });
            }
        }

        rows.push(TokenMatch {
            token: token.to_string(),
            best,
        });
    }

    rows
}

// ============================================================================
// Tests
// ============================================================================
