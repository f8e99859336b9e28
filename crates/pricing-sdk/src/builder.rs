//! Builder pattern for PricingEngine

use crate::config::EngineConfig;
use crate::error::Result;
use crate::pricing_engine::PricingEngine;
use pricing_core::RuleSet;
use pricing_runtime::{DecisionCache, FetchDelay, RuleEvaluator, SleepDelay};
use std::sync::Arc;

/// Builder for PricingEngine
///
/// # Example
///
/// ```rust,ignore
/// use pricing_sdk::{EngineConfig, NoDelay, PricingEngineBuilder};
/// use std::sync::Arc;
///
/// // Generated rules, production delay
/// let engine = PricingEngineBuilder::new()
///     .with_config(EngineConfig::new().with_rules_count(10_000))
///     .build()?;
///
/// // Fixture rules, no delay (for testing)
/// let engine = PricingEngineBuilder::new()
///     .with_rules(fixture_rules)
///     .with_fetch_delay(Arc::new(NoDelay))
///     .build()?;
/// ```
pub struct PricingEngineBuilder {
    config: EngineConfig,
    rules: Option<RuleSet>,
    fetch_delay: Option<Arc<dyn FetchDelay>>,
    cache: Option<Arc<DecisionCache>>,
}

impl PricingEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::new(),
            rules: None,
            fetch_delay: None,
            cache: None,
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the generated rule count
    pub fn rules_count(mut self, count: i64) -> Self {
        self.config.rules_count = count;
        self
    }

    /// Set the generation seed
    pub fn rules_seed(mut self, seed: u64) -> Self {
        self.config.rules_seed = seed;
        self
    }

    /// Set the upstream fetch delay in milliseconds
    pub fn fetch_delay_ms(mut self, millis: u64) -> Self {
        self.config.fetch_delay_ms = millis;
        self
    }

    /// Use a prebuilt rule set instead of generating one
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Use a custom fetch delay strategy instead of sleeping `fetch_delay_ms`
    pub fn with_fetch_delay(mut self, delay: Arc<dyn FetchDelay>) -> Self {
        self.fetch_delay = Some(delay);
        self
    }

    /// Share an existing decision cache
    pub fn with_cache(mut self, cache: Arc<DecisionCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Build the engine.
    ///
    /// Fails when the configuration is invalid (negative rule count).
    pub fn build(self) -> Result<PricingEngine> {
        self.config.validate()?;

        let rules = match self.rules {
            Some(rules) => rules,
            None => RuleSet::generate(self.config.rules_count, self.config.rules_seed)?,
        };

        let fetch_delay = self
            .fetch_delay
            .unwrap_or_else(|| Arc::new(SleepDelay::new(self.config.fetch_delay())));

        let cache = self.cache.unwrap_or_default();

        tracing::info!(
            "Pricing engine ready: {} rules, fetch delay {} ms",
            rules.len(),
            self.config.fetch_delay_ms
        );

        Ok(PricingEngine::new(
            RuleEvaluator::with_delay(rules, fetch_delay),
            cache,
            self.config,
        ))
    }
}

impl Default for PricingEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
