//! Form Errors

use thiserror::Error;

/// Validation failures raised while submitting the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    /// Draft is empty after trimming
    #[error("Please enter a todo item")]
    EmptyInput,
}

/// Failures while reading the embedded form configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid form config: {0}")]
    Parse(#[from] serde_json::Error),
}
