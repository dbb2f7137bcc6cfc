//! Engine configuration.

use std::path::PathBuf;

use crate::error::{DocsimError, Result};
use crate::nlp::MATCH_THRESHOLD;

/// Synonym file looked up when nothing else is configured.
pub const DEFAULT_SYNONYMS_PATH: &str = "input/synonyms.txt";

/// Configuration for a [`SimilarityEngine`](crate::engine::SimilarityEngine).
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Fuzzy-equality cutoff for tokens (default: 0.75)
    pub match_threshold: f64,
    /// Synonym source; `None` runs without synonyms
    pub synonyms_path: Option<PathBuf>,
    /// Expand tokens with synonyms before counting (default: true)
    pub expand_synonyms: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            match_threshold: MATCH_THRESHOLD,
            synonyms_path: Some(PathBuf::from(DEFAULT_SYNONYMS_PATH)),
            expand_synonyms: true,
        }
    }
}

impl EngineConfig {
    /// Default configuration with a different match threshold.
    pub fn with_threshold(threshold: f64) -> Result<Self> {
        let config = Self {
            match_threshold: threshold,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the threshold is a usable cutoff in `(0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if !(self.match_threshold > 0.0 && self.match_threshold <= 1.0) {
            return Err(DocsimError::InvalidInput(format!(
                "match threshold must be in (0, 1], got {}",
                self.match_threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.match_threshold, 0.75);
        assert_eq!(config.synonyms_path, Some(PathBuf::from("input/synonyms.txt")));
        assert!(config.expand_synonyms);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_threshold_bounds() {
        assert!(EngineConfig::with_threshold(1.0).is_ok());
        assert!(EngineConfig::with_threshold(0.5).is_ok());
        assert!(EngineConfig::with_threshold(0.0).is_err());
        assert!(EngineConfig::with_threshold(1.5).is_err());
        assert!(EngineConfig::with_threshold(f64::NAN).is_err());
    }
}
