//! Error types for colloquy

use thiserror::Error;

/// Main error type for colloquy
#[derive(Debug, Error)]
pub enum ColloquyError {
    /// A permission check refused the operation
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// Comment not found
    #[error("Comment not found: {0}")]
    CommentNotFound(String),

    /// Thread not found
    #[error("Thread not found: {0}")]
    ThreadNotFound(String),

    /// Vote not found
    #[error("Vote not found: {0}")]
    VoteNotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl ColloquyError {
    /// Build an access-denied error for the given action
    pub fn access_denied(action: impl Into<String>) -> Self {
        ColloquyError::AccessDenied(action.into())
    }

    /// Whether this error is a permission refusal
    pub fn is_access_denied(&self) -> bool {
        matches!(self, ColloquyError::AccessDenied(_))
    }
}

/// Result type alias for colloquy
pub type Result<T> = std::result::Result<T, ColloquyError>;
