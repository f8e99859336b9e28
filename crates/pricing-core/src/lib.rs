//! Pricing Core - Core types and definitions for the dynamic pricing engine
//!
//! This crate provides the fundamental types shared by the pricing workspace:
//! - `PricingRule`, a single discount rule with its match conditions
//! - `RuleSet`, the immutable, priority-ordered collection scanned on every evaluation
//! - Error types

pub mod error;
pub mod rule;
pub mod ruleset;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use rule::PricingRule;
pub use ruleset::{RuleSet, DEFAULT_RULES_COUNT, DEFAULT_RULES_SEED};
