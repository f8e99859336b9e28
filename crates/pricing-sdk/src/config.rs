//! Configuration types for PricingEngine

use crate::error::{Result, SdkError};
use pricing_core::{DEFAULT_RULES_COUNT, DEFAULT_RULES_SEED};
use pricing_runtime::DEFAULT_FETCH_DELAY_MS;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of rules generated at startup
    pub rules_count: i64,

    /// Seed for rule generation
    pub rules_seed: u64,

    /// Simulated upstream pricing-context latency per evaluation
    pub fetch_delay_ms: u64,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            rules_count: DEFAULT_RULES_COUNT,
            rules_seed: DEFAULT_RULES_SEED,
            fetch_delay_ms: DEFAULT_FETCH_DELAY_MS,
        }
    }

    /// Set the generated rule count
    pub fn with_rules_count(mut self, count: i64) -> Self {
        self.rules_count = count;
        self
    }

    /// Set the generation seed
    pub fn with_rules_seed(mut self, seed: u64) -> Self {
        self.rules_seed = seed;
        self
    }

    /// Set the upstream fetch delay
    pub fn with_fetch_delay_ms(mut self, millis: u64) -> Self {
        self.fetch_delay_ms = millis;
        self
    }

    /// Upstream fetch delay as a duration
    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }

    /// Reject settings that cannot produce an engine
    pub fn validate(&self) -> Result<()> {
        if self.rules_count < 0 {
            return Err(SdkError::ConfigError(format!(
                "rules_count must be >= 0, got {}",
                self.rules_count
            )));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
