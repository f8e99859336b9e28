//! SDK error types

use pricing_core::CoreError;
use pricing_runtime::RuntimeError;
use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A pricing query argument outside its valid domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Error building core types
    #[error("Core error: {0}")]
    CoreError(#[from] CoreError),

    /// Runtime error
    #[error("Runtime error: {0}")]
    RuntimeError(RuntimeError),
}

impl From<RuntimeError> for SdkError {
    fn from(err: RuntimeError) -> Self {
        match err {
            RuntimeError::InvalidArgument { .. } => SdkError::InvalidArgument(err.to_string()),
            RuntimeError::Core(core) => SdkError::CoreError(core),
        }
    }
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
