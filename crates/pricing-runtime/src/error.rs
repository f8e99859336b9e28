//! Runtime error types

use pricing_core::CoreError;
use thiserror::Error;

/// Runtime error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuntimeError {
    /// A query argument outside its valid domain
    #[error("Invalid argument: {field} must be a non-negative number, got {value}")]
    InvalidArgument { field: &'static str, value: String },

    /// Error raised while building core types
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl RuntimeError {
    pub(crate) fn invalid_argument(field: &'static str, value: impl ToString) -> Self {
        RuntimeError::InvalidArgument {
            field,
            value: value.to_string(),
        }
    }
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
