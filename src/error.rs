//! Typed errors for the urlsift library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.
//!
//! The matcher and filter engine are pure and degrade instead of failing;
//! errors exist only at the collaborator seams (URL discovery, LLM
//! categorization, pattern generation) and where their responses are parsed.

use thiserror::Error;

/// Errors that can occur during URL analysis operations.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// URL discovery collaborator failed
    #[error("URL mapping error: {0}")]
    Mapper(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// AI service unavailable or failed
    #[error("AI service error: {0}")]
    AI(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// JSON parsing error (malformed collaborator response)
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Invalid input provided by the caller
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl AnalysisError {
    /// Wrap an arbitrary mapper failure.
    pub fn mapper(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Mapper(Box::new(err))
    }

    /// Wrap an arbitrary AI failure.
    pub fn ai(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::AI(Box::new(err))
    }

    /// Construct an invalid-input error.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
