//! Term Frequency Counting
//!
//! Raw occurrence counts (not normalized by document length). Keys are kept
//! in sorted order so that every scan over a [`TermFrequency`] visits terms
//! in the same sequence on every run.

use std::collections::btree_map;
use std::collections::BTreeMap;

/// Token -> occurrence count for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFrequency {
    counts: BTreeMap<String, usize>,
}

impl TermFrequency {
    /// Count every token of a sequence. O(n log k) for k distinct terms.
    ///
    /// # Example
    /// ```
    /// use docsim_core::nlp::term_frequency::TermFrequency;
    ///
    /// let tf = TermFrequency::from_tokens(["to", "be", "or", "not", "to", "be"]);
    /// assert_eq!(tf.get("to"), 2);
    /// assert_eq!(tf.get("not"), 1);
    /// assert_eq!(tf.get("question"), 0);
    /// ```
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for token in tokens {
            *counts.entry(token.into()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Exact count of `term`, 0 when absent.
    #[inline]
    pub fn get(&self, term: &str) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Distinct terms with their counts, in lexicographic order.
    #[inline]
    pub fn iter(&self) -> btree_map::Iter<'_, String, usize> {
        self.counts.iter()
    }

    /// Distinct terms in lexicographic order.
    #[inline]
    pub fn terms(&self) -> btree_map::Keys<'_, String, usize> {
        self.counts.keys()
    }

    /// Number of distinct terms.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts (the length of the source sequence).
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

impl<'a> IntoIterator for &'a TermFrequency {
    type Item = (&'a String, &'a usize);
    type IntoIter = btree_map::Iter<'a, String, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for TermFrequency {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}
