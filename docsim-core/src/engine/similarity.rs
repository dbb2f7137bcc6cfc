//! Similarity Engine
//!
//! Owns the one piece of long-lived state (the synonym table) and runs the
//! whole pipeline for each call:
//!
//! ```text
//! text ─▶ tokenize ─▶ expand synonyms ─▶ term frequency ─┐
//!                                                        ├─▶ fuzzy cosine
//! text ─▶ tokenize ─▶ expand synonyms ─▶ term frequency ─┘
//! ```
//!
//! Every call is independent. The engine is `Send + Sync` and can be shared
//! across threads; the synonym table is never mutated after construction.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::engine::alignment::{best_matches, matched_tokens, TokenMatch};
use crate::error::Result;
use crate::nlp::{fuzzy_cosine_similarity, hybrid_similarity, tokenize, SynonymTable, TermFrequency};

/// Document similarity engine.
///
/// # Usage
/// ```
/// use docsim_core::engine::SimilarityEngine;
/// use docsim_core::nlp::SynonymTable;
///
/// let engine = SimilarityEngine::with_synonyms(SynonymTable::from_lines(["big,large,huge"]));
/// let score = engine.cosine_similarity("a big house", "a huge house");
/// assert!((score - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct SimilarityEngine {
    config: EngineConfig,
    synonyms: Arc<SynonymTable>,
}

impl Default for SimilarityEngine {
    fn default() -> Self {
        Self::with_synonyms(SynonymTable::new())
    }
}

impl SimilarityEngine {
    /// Build an engine from configuration, loading the synonym file if one
    /// is configured.
    ///
    /// An unreadable synonym file is not fatal: it is logged and the engine
    /// runs with an empty table. Only an invalid threshold is rejected.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        let synonyms = match &config.synonyms_path {
            Some(path) if config.expand_synonyms => SynonymTable::load_or_empty(path),
            _ => SynonymTable::new(),
        };

        info!(
            threshold = config.match_threshold,
            synonym_words = synonyms.len(),
            expand = config.expand_synonyms,
            "Similarity engine ready"
        );

        Ok(Self {
            config,
            synonyms: Arc::new(synonyms),
        })
    }

    /// Engine with default settings and an already-built synonym table.
    pub fn with_synonyms(synonyms: SynonymTable) -> Self {
        Self::with_shared_synonyms(Arc::new(synonyms))
    }

    /// Engine sharing a synonym table with other engines.
    pub fn with_shared_synonyms(synonyms: Arc<SynonymTable>) -> Self {
        Self {
            config: EngineConfig {
                synonyms_path: None,
                ..Default::default()
            },
            synonyms,
        }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    #[inline]
    pub fn match_threshold(&self) -> f64 {
        self.config.match_threshold
    }

    /// Normalized tokens of `text`, unexpanded.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        tokenize(text).to_vec()
    }

    /// Tokens of `text` followed by their synonyms (when expansion is on).
    pub fn expanded_tokens(&self, text: &str) -> Vec<String> {
        let tokens = tokenize(text);
        if self.config.expand_synonyms {
            self.synonyms.expand(tokens.iter())
        } else {
            tokens.to_vec()
        }
    }

    /// Term frequencies of the expanded tokens of `text`.
    pub fn term_frequency(&self, text: &str) -> TermFrequency {
        TermFrequency::from_tokens(self.expanded_tokens(text))
    }

    /// Document-level fuzzy cosine similarity, in `[0, 1]`.
    ///
    /// 0.0 when either text has no tokens.
    pub fn cosine_similarity(&self, text1: &str, text2: &str) -> f64 {
        let tf1 = self.term_frequency(text1);
        let tf2 = self.term_frequency(text2);

        let score = fuzzy_cosine_similarity(&tf1, &tf2, self.config.match_threshold);
        debug!(
            terms_1 = tf1.len(),
            terms_2 = tf2.len(),
            score,
            "Computed cosine similarity"
        );
        score
    }

    /// Hybrid string similarity of the two raw texts taken whole.
    ///
    /// Cost is quadratic in the text lengths.
    pub fn hybrid_similarity(&self, text1: &str, text2: &str) -> f64 {
        hybrid_similarity(text1, text2)
    }

    /// Tokens of `text1` that fuzzily match a token of expanded `text2`.
    ///
    /// Always a subset of `self.tokenize(text1)`.
    pub fn matching_tokens(&self, text1: &str, text2: &str) -> BTreeSet<String> {
        let tokens1 = self.tokenize(text1);
        let expanded2 = self.expanded_tokens(text2);
        matched_tokens(&tokens1, &expanded2, self.config.match_threshold)
    }

    /// Best-scoring token of `text2` for each distinct token of `text1`.
    ///
    /// Neither side is synonym-expanded.
    pub fn token_similarities(&self, text1: &str, text2: &str) -> Vec<TokenMatch> {
        best_matches(&self.tokenize(text1), &self.tokenize(text2))
    }
}
