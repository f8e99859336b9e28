//! Pricing Runtime - Rule evaluation and decision auditing
//!
//! This crate provides the evaluation engine that scans a `RuleSet` for a
//! pricing query, and the append-only decision cache that audits every
//! evaluation.

pub mod cache;
pub mod delay;
pub mod error;
pub mod evaluator;
pub mod result;

// Re-export main types
pub use cache::{AuditRecord, CacheStats, DecisionCache};
pub use delay::{FetchDelay, NoDelay, SleepDelay, DEFAULT_FETCH_DELAY_MS};
pub use error::{Result, RuntimeError};
pub use evaluator::RuleEvaluator;
pub use result::{PricingResult, RuleMatch};
