//! Similarity Reports
//!
//! Gathers every engine output for one pair of texts and renders it for
//! humans (`text`) or tools (`json`). Rendering lives here, outside the
//! engine; the engine only produces numbers and token sets.

use std::collections::BTreeSet;
use std::fmt::{self, Write as _};
use std::io::Write;
use std::str::FromStr;

use serde::Serialize;

use crate::engine::{SimilarityEngine, TokenMatch};
use crate::error::{DocsimError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Plain-text report
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for ReportFormat {
    type Err = DocsimError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(DocsimError::InvalidInput(format!(
                "unknown report format '{other}' (expected 'text' or 'json')"
            ))),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => f.write_str("text"),
            ReportFormat::Json => f.write_str("json"),
        }
    }
}

// ============================================================================
// Report
// ============================================================================

/// Everything known about the similarity of two texts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityReport {
    /// Fuzzy term-vector cosine similarity
    pub cosine: f64,
    /// Hybrid string similarity of the whole texts
    pub hybrid: f64,
    /// Tokens of text 1 matched in text 2
    pub matched_in_text_1: BTreeSet<String>,
    /// Tokens of text 2 matched in text 1
    pub matched_in_text_2: BTreeSet<String>,
    /// Best partner in text 2 for each token of text 1
    pub best_matches: Vec<TokenMatch>,
    pub text_1: String,
    pub text_2: String,
}

impl SimilarityReport {
    /// Run every engine operation on the pair.
    pub fn compute(engine: &SimilarityEngine, text1: &str, text2: &str) -> Self {
        Self {
            cosine: engine.cosine_similarity(text1, text2),
            hybrid: engine.hybrid_similarity(text1, text2),
            matched_in_text_1: engine.matching_tokens(text1, text2),
            matched_in_text_2: engine.matching_tokens(text2, text1),
            best_matches: engine.token_similarities(text1, text2),
            text_1: text1.to_string(),
            text_2: text2.to_string(),
        }
    }

    /// Render in the requested format.
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.render_text()),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    /// Render and write to `writer`, newline-terminated.
    pub fn write_to<W: Write>(&self, mut writer: W, format: ReportFormat) -> Result<()> {
        let rendered = self.render(format)?;
        writer.write_all(rendered.as_bytes())?;
        if !rendered.ends_with('\n') {
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }

    fn render_text(&self) -> String {
        let mut out = String::new();

        // fmt::Write for String never fails
        let _ = writeln!(out, "Cosine Similarity: {:.2}%", self.cosine * 100.0);
        let _ = writeln!(out, "Hybrid Similarity: {:.2}%", self.hybrid * 100.0);

        let _ = writeln!(out, "\n--- Matched Tokens (Text 1) ---");
        let _ = writeln!(out, "{}", join_tokens(&self.matched_in_text_1));
        let _ = writeln!(out, "\n--- Matched Tokens (Text 2) ---");
        let _ = writeln!(out, "{}", join_tokens(&self.matched_in_text_2));

        let _ = writeln!(out, "\n--- Best Matches ---");
        for row in &self.best_matches {
            let _ = writeln!(out, "{row}");
        }

        let _ = writeln!(out, "\n--- Text 1 ---\n{}", self.text_1);
        let _ = writeln!(out, "\n--- Text 2 ---\n{}", self.text_2);
        out
    }
}

fn join_tokens(tokens: &BTreeSet<String>) -> String {
    if tokens.is_empty() {
        return "(none)".to_string();
    }
    tokens.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

// ============================================================================
// Tests
// ============================================================================
