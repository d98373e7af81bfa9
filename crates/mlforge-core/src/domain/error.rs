use thiserror::Error;

/// Domain-level validation failures.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Actionable (provide suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "The name becomes a single directory under src/".into(),
                "Examples: cnnClassifier, text_summarizer, demo".into(),
            ],
        }
    }
}
