//! Similarity Engine
//!
//! - `similarity`: the `SimilarityEngine` facade (tokenize, expand, count,
//!   fuzzy cosine, whole-text hybrid score)
//! - `alignment`: per-token explanations (matched-token sets, best matches)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    SimilarityEngine                             │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────────┐  │
//! │  │ Tokenizer    │  │ SynonymTable │  │ TermFrequency        │  │
//! │  │ UAX #29      │  │ read-only    │  │ sorted counts        │  │
//! │  └──────────────┘  └──────────────┘  └──────────────────────┘  │
//! │                           │                                     │
//! │              ┌────────────┴────────────┐                        │
//! │              │ Fuzzy cosine / alignment │                       │
//! │              │ hybrid token equality    │                       │
//! │              └──────────────────────────┘                       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Cost
//! Fuzzy alignment is quadratic in the number of distinct terms and has no
//! internal deadline. Callers comparing large documents under a latency
//! budget must bound the call themselves.

pub mod alignment;
pub mod similarity;

pub use alignment::{best_matches, matched_tokens, BestMatch, TokenMatch};
pub use similarity::SimilarityEngine;
