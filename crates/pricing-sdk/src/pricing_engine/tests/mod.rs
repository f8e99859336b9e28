//! Unit tests for PricingEngine

use super::*;
use crate::builder::PricingEngineBuilder;
use crate::error::SdkError;
use pricing_core::{PricingRule, RuleSet};
use pricing_runtime::{NoDelay, RuleMatch};
use std::sync::Arc;

fn engine() -> PricingEngine {
    let rules = RuleSet::from_rules(vec![
        PricingRule::new(0, (1, 100), 0.0, 0.10, 5),
        PricingRule::new(1, (50, 150), 20.0, 0.20, 5),
        PricingRule::new(2, (1, 1000), 0.0, 0.05, 10),
    ])
    .unwrap();

    PricingEngineBuilder::new()
        .with_rules(rules)
        .with_fetch_delay(Arc::new(NoDelay))
        .build()
        .unwrap()
}

#[test]
fn test_price_request() {
    let request = PriceRequest::new(42, 29.99, 60.0).with_session("sess-1");

    assert_eq!(request.item_id, 42);
    assert_eq!(request.session_id.as_deref(), Some("sess-1"));
}

#[test]
fn test_price_request_deserialize_without_session() {
    let request: PriceRequest =
        serde_json::from_str(r#"{"item_id": 7, "base_price": 10.0, "cart_total": 0.0}"#).unwrap();
    assert!(request.session_id.is_none());
}

#[tokio::test]
async fn test_price_records_decision() {
    let engine = engine();
    let response = engine.price(PriceRequest::new(75, 100.0, 25.0)).await.unwrap();

    assert_eq!(response.result.rule_matched, RuleMatch::Rule(2));
    assert_eq!(response.cache_stats.cache_size, 1);

    let records = engine.cache().records().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].decision_id, response.decision_id);
    assert_eq!(records[0].cart_total, 25.0);
}

#[tokio::test]
async fn test_evaluate_does_not_record() {
    let engine = engine();
    engine.evaluate(75, 100.0, 25.0).await.unwrap();

    assert_eq!(engine.stats().await.cache_size, 0);
}

#[tokio::test]
async fn test_price_rejects_invalid_argument_without_recording() {
    let engine = engine();
    let err = engine
        .price(PriceRequest::new(75, -1.0, 25.0))
        .await
        .unwrap_err();

    assert!(matches!(err, SdkError::InvalidArgument(_)));
    assert_eq!(engine.stats().await.cache_size, 0);
}

#[tokio::test]
async fn test_reset_clears_cache() {
    let engine = engine();
    engine.price(PriceRequest::new(1, 10.0, 0.0)).await.unwrap();
    engine.price(PriceRequest::new(2, 10.0, 0.0)).await.unwrap();
    assert_eq!(engine.stats().await.cache_size, 2);

    engine.reset().await;
    assert_eq!(engine.stats().await.cache_size, 0);
}
