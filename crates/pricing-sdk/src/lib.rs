//! Dynamic Pricing Engine SDK
//!
//! High-level API for building a pricing engine and running priced requests
//! through evaluation and the decision audit cache.

pub mod builder;
pub mod config;
pub mod error;
pub mod pricing_engine;

// Re-export main types
pub use builder::PricingEngineBuilder;
pub use config::EngineConfig;
pub use error::{Result, SdkError};
pub use pricing_engine::{PriceRequest, PriceResponse, PricingEngine};

// Re-export commonly used types from dependencies
pub use pricing_core::{PricingRule, RuleSet};
pub use pricing_runtime::{
    AuditRecord, CacheStats, DecisionCache, FetchDelay, NoDelay, PricingResult, RuleMatch,
    SleepDelay,
};
pub use uuid::Uuid;
