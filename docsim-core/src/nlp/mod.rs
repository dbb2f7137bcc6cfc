//! NLP Module - Text Normalization and String Similarity
//!
//! Building blocks of the document similarity pipeline, leaves first.
//!
//! # Algorithms
//!
//! | Algorithm | Reference | Complexity | Role |
//! |-----------|-----------|------------|------|
//! | [Tokenizer](tokenizer) | UAX #29 word boundaries | O(n) | Normalized words |
//! | [Synonym](synonym) | Dictionary lookup | O(1) per token | Expansion |
//! | [Term frequency](term_frequency) | Raw counts | O(n log k) | Document vector |
//! | [Levenshtein](levenshtein) | Levenshtein (1966) | O(m×n) | Typo detection |
//! | [Jaro-Winkler](jaro) | Winkler (1990) | O(m×n) | Prefix/order similarity |
//! | [Hybrid](hybrid) | 50/50 blend | O(m×n) | Fuzzy term equality |
//! | [Cosine](cosine) | Salton & McGill (1983) | O(U×K×L²) | Document similarity |
//!
//! # Example
//!
//! ```
//! use docsim_core::nlp::{tokenize, hybrid_similarity, levenshtein_distance};
//!
//! let tokens = tokenize("Colour, not color.").to_vec();
//! assert_eq!(tokens, vec!["colour", "not", "color"]);
//!
//! assert!(hybrid_similarity("colour", "color") > 0.85);
//! assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
//! ```

pub mod tokenizer;
pub mod synonym;
pub mod term_frequency;
pub mod levenshtein;
pub mod jaro;
pub mod hybrid;
pub mod cosine;

// Re-export main functions for convenience
pub use tokenizer::{tokenize, tokenize_reader, Tokens};
pub use synonym::{parse_group, SynonymTable};
pub use term_frequency::TermFrequency;
pub use levenshtein::{levenshtein_distance, levenshtein_similarity};
pub use jaro::{jaro_similarity, jaro_winkler_similarity};
pub use hybrid::{hybrid_similarity, is_similar, MATCH_THRESHOLD};
pub use cosine::{fuzzy_cosine_breakdown, fuzzy_cosine_similarity, matched_frequency, CosineBreakdown};
