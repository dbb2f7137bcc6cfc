//! Docsim Core - Fuzzy document similarity
//!
//! Estimates how similar two free-text documents are and explains which
//! tokens contributed. Key design principles:
//!
//! - **Fuzzy term equality**: tokens are "the same term" when their hybrid
//!   Jaro-Winkler/Levenshtein score reaches the match threshold, so
//!   misspellings and variant spellings still align
//! - **Synonym-aware**: a line-oriented synonym table augments both
//!   documents before counting
//! - **Stateless calls**: the only long-lived state is the read-only
//!   synonym table; every computation builds and drops its own vectors
//! - **Deterministic**: term maps and synonym sets are ordered, so ties
//!   resolve the same way on every run

#![warn(clippy::clone_on_ref_ptr)]
#![warn(clippy::unnecessary_to_owned)]

pub mod config;
pub mod engine;
pub mod error;
pub mod nlp;
pub mod report;

pub use config::{EngineConfig, DEFAULT_SYNONYMS_PATH};
pub use engine::{BestMatch, SimilarityEngine, TokenMatch};
pub use error::{DocsimError, Result};
pub use nlp::{SynonymTable, TermFrequency, MATCH_THRESHOLD};
pub use report::{ReportFormat, SimilarityReport};
