//! Domain error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single schema violation, naming the offending field path and the
/// expectation that was not met.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Dotted path to the offending field, e.g. `payload.topic`.
    pub path: String,
    /// The expectation that was not met.
    pub message: String,
}

impl ValidationIssue {
    /// Creates a new validation issue.
    #[must_use]
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The request body did not match any accepted shape. Carries every
    /// violation found so the caller can report all problems at once.
    #[error("request validation failed with {} issue(s)", .0.len())]
    Validation(Vec<ValidationIssue>),

    /// An unexpected fault inside a generator despite well-typed input.
    /// Should not occur by contract, but is caught rather than propagated.
    #[error("generation fault: {0}")]
    Generation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_reports_issue_count() {
        let err = AgentError::Validation(vec![
            ValidationIssue::new("payload.topic", "missing required field"),
            ValidationIssue::new("payload.tone", "expected non-empty text"),
        ]);

        assert_eq!(err.to_string(), "request validation failed with 2 issue(s)");
    }

    #[test]
    fn test_generation_error_carries_message() {
        let err = AgentError::Generation("boom".to_owned());

        assert_eq!(err.to_string(), "generation fault: boom");
    }
}
