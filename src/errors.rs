//! Error types
//!
//! A single error enum covers configuration problems, malformed graph input,
//! failures raised by linguistic collaborators, and cooperative cancellation.
//! Empty input is never an error: it produces an empty result.

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, TextRankError>;

/// Boxed error produced by a linguistic collaborator
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised by graph construction, ranking and the extraction pipelines
#[derive(Debug, Error)]
pub enum TextRankError {
    /// A configuration value is out of range. Reported before any computation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An edge weight was negative or not finite
    #[error("edge weight must be finite and non-negative, got {weight}")]
    InvalidWeight { weight: f64 },

    /// A segmenter, tagger or reducer failed. The core never masks these.
    #[error("{stage} failed: {source}")]
    Collaborator {
        stage: &'static str,
        #[source]
        source: CollaboratorError,
    },

    /// The caller raised the cancellation flag
    #[error("extraction cancelled")]
    Cancelled,

    /// A JSON configuration could not be parsed
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl TextRankError {
    /// Build an [`TextRankError::InvalidConfig`] from any message
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Wrap a collaborator failure, tagging it with the stage that raised it
    pub fn collaborator(stage: &'static str, source: impl Into<CollaboratorError>) -> Self {
        Self::Collaborator {
            stage,
            source: source.into(),
        }
    }

    /// Returns `true` for configuration errors
    pub fn is_config(&self) -> bool {
        matches!(self, Self::InvalidConfig(_) | Self::Json(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_message() {
        let err = TextRankError::invalid_config("damping must be in (0, 1), got 1.5");
        assert_eq!(
            err.to_string(),
            "invalid configuration: damping must be in (0, 1), got 1.5"
        );
        assert!(err.is_config());
    }

    #[test]
    fn test_collaborator_keeps_source() {
        let err = TextRankError::collaborator("pos tagger", "model not loaded");
        assert_eq!(err.to_string(), "pos tagger failed: model not loaded");
        assert!(std::error::Error::source(&err).is_some());
        assert!(!err.is_config());
    }

    #[test]
    fn test_json_error_converts() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: TextRankError = parse.unwrap_err().into();
        assert!(matches!(err, TextRankError::Json(_)));
        assert!(err.is_config());
    }
}
