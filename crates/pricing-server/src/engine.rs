//! Pricing engine initialization
//!
//! Converts server configuration into an SDK engine. The rule set is built
//! here, once, before the listener starts.

use crate::config::ServerConfig;
use anyhow::Result;
use pricing_sdk::{PricingEngine, PricingEngineBuilder};
use tracing::info;

/// Initialize the pricing engine
pub fn init_engine(config: &ServerConfig) -> Result<PricingEngine> {
    config.validate()?;

    let engine = PricingEngineBuilder::new()
        .with_config(config.engine_config())
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build pricing engine: {}", e))?;

    info!(
        "✓ Pricing engine built: {} rules (seed {}), fetch delay {} ms",
        engine.rules().len(),
        config.rules_seed,
        config.fetch_delay_ms
    );

    Ok(engine)
}
