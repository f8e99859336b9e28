//! Error types for Pricing Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Startup configuration that cannot produce a rule set
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Hand-specified rule that violates a rule invariant
    #[error("Invalid rule {rule_id}: {reason}")]
    InvalidRule { rule_id: u64, reason: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
