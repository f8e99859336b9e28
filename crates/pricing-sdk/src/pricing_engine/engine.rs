//! Core PricingEngine implementation

use super::types::{PriceRequest, PriceResponse};
use crate::config::EngineConfig;
use crate::error::Result;
use pricing_core::RuleSet;
use pricing_runtime::{CacheStats, DecisionCache, PricingResult, RuleEvaluator};
use std::sync::Arc;
use tracing::field::Empty;
use tracing::Instrument;
use uuid::Uuid;

/// Pricing engine: one immutable rule set, one evaluator, one audit cache.
///
/// The engine is `Send + Sync` and is meant to be shared by `Arc` across all
/// request handlers. Only the cache is mutable, and it guards itself.
pub struct PricingEngine {
    evaluator: RuleEvaluator,
    cache: Arc<DecisionCache>,
    config: EngineConfig,
}

impl PricingEngine {
    pub(crate) fn new(
        evaluator: RuleEvaluator,
        cache: Arc<DecisionCache>,
        config: EngineConfig,
    ) -> Self {
        Self {
            evaluator,
            cache,
            config,
        }
    }

    /// Price a request: evaluate, record the decision, and read cache stats.
    pub async fn price(&self, request: PriceRequest) -> Result<PriceResponse> {
        let span = tracing::info_span!(
            "pricing_engine.evaluate_rules",
            pricing.variant_id = request.item_id,
            pricing.session_id = request.session_id.as_deref().unwrap_or(""),
            pricing.rules_evaluated = Empty,
            pricing.base_price = request.base_price,
            pricing.final_price = Empty,
            pricing.rule_matched = Empty,
            pricing.cache_size = Empty,
        );

        self.price_in_span(request).instrument(span).await
    }

    async fn price_in_span(&self, request: PriceRequest) -> Result<PriceResponse> {
        let result = self
            .evaluate(request.item_id, request.base_price, request.cart_total)
            .await?;
        let decision_id = self
            .store(request.item_id, request.cart_total, &result)
            .await;
        let cache_stats = self.stats().await;

        let span = tracing::Span::current();
        span.record("pricing.rules_evaluated", result.rules_evaluated as u64);
        span.record("pricing.final_price", result.final_price);
        span.record(
            "pricing.rule_matched",
            result.rule_matched.rule_id().map_or(-1, |id| id as i64),
        );
        span.record("pricing.cache_size", cache_stats.cache_size as u64);

        tracing::info!(
            "Priced item {}: {} -> {} (rule {}), decision {}",
            request.item_id,
            result.base_price,
            result.final_price,
            result.rule_matched,
            decision_id
        );

        Ok(PriceResponse {
            decision_id,
            result,
            cache_stats,
        })
    }

    /// Evaluate a pricing query without recording it
    pub async fn evaluate(
        &self,
        item_id: i64,
        base_price: f64,
        cart_total: f64,
    ) -> Result<PricingResult> {
        Ok(self
            .evaluator
            .evaluate(item_id, base_price, cart_total)
            .await?)
    }

    /// Record an evaluation result in the audit cache
    pub async fn store(&self, item_id: i64, cart_total: f64, result: &PricingResult) -> Uuid {
        self.cache.store(item_id, cart_total, result).await
    }

    /// Audit cache statistics
    pub async fn stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    /// Clear the audit cache. Test setup and teardown only.
    pub async fn reset(&self) {
        self.cache.reset().await
    }

    /// Rule set scanned by this engine
    pub fn rules(&self) -> &RuleSet {
        self.evaluator.rules()
    }

    /// Audit cache
    pub fn cache(&self) -> &Arc<DecisionCache> {
        &self.cache
    }

    /// Configuration used to build this engine
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
