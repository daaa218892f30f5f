//! Model-subsystem error type.

use thiserror::Error;

/// Errors produced by `evr-model`.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A numeric input violated a documented precondition (non-positive
    /// base range, out-of-range SoC fraction, non-finite value).
    #[error("invalid range input: {0}")]
    InvalidInput(String),

    /// A model configuration failed validation at construction time.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `evr-model`.
pub type ModelResult<T> = Result<T, ModelError>;
