//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question id: '{0}' is not an unsigned integer")]
    InvalidQuestionId(String),
}

impl DomainError {
    /// The raw input that was rejected
    pub fn rejected_value(&self) -> &str {
        match self {
            DomainError::InvalidQuestionId(raw) => raw,
        }
    }
}
