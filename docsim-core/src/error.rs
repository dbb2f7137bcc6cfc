//! Error types for docsim operations.
//!
//! Core similarity functions over in-memory text are infallible; only the
//! I/O-facing edges (synonym loading, reader tokenization, report output)
//! return these errors.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for docsim operations.
pub type Result<T> = std::result::Result<T, DocsimError>;

/// Errors surfaced by the similarity engine and its front ends.
#[derive(Error, Debug)]
pub enum DocsimError {
    /// Synonym source could not be read
    #[error("failed to load synonyms from {}: {source}", .path.display())]
    ConfigLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reader-backed tokenization failed before the whole input was consumed
    #[error("tokenization failed: {0}")]
    Tokenization(String),

    /// Caller-supplied input rejected
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Report serialization failed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl DocsimError {
    /// Returns true if the engine can keep running without the failed resource.
    ///
    /// A missing synonym table only disables expansion; everything else
    /// aborts the current operation.
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, DocsimError::ConfigLoad { .. })
    }

    /// Process exit code used by the `docsim` binary.
    #[inline]
    pub fn exit_code(&self) -> i32 {
        match self {
            DocsimError::InvalidInput(_) => 2,
            DocsimError::ConfigLoad { .. } | DocsimError::Io(_) => 3,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_load_is_recoverable() {
        let err = DocsimError::ConfigLoad {
            path: PathBuf::from("input/synonyms.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("input/synonyms.txt"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(DocsimError::InvalidInput("x".into()).exit_code(), 2);
        assert_eq!(DocsimError::Tokenization("x".into()).exit_code(), 1);
        assert!(!DocsimError::Tokenization("x".into()).is_recoverable());
    }
}
