//! REST API type definitions
//!
//! Request and response types for the REST API endpoints.

use pricing_sdk::{PriceRequest, PriceResponse, PricingEngine};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<PricingEngine>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
}

/// Pricing request payload
#[derive(Debug, Deserialize)]
pub struct PriceRequestPayload {
    /// Product variant being priced
    pub variant_id: i64,

    /// Catalog list price
    pub base_price: f64,

    /// Cart subtotal before this item
    pub cart_total: f64,

    /// Optional caller session
    #[serde(default)]
    pub session_id: Option<String>,
}

impl From<PriceRequestPayload> for PriceRequest {
    fn from(payload: PriceRequestPayload) -> Self {
        PriceRequest {
            item_id: payload.variant_id,
            base_price: payload.base_price,
            cart_total: payload.cart_total,
            session_id: payload.session_id,
        }
    }
}

/// Pricing response payload
#[derive(Debug, Serialize, Deserialize)]
pub struct PriceResponsePayload {
    pub variant_id: i64,
    pub base_price: f64,
    pub final_price: f64,
    pub discount_pct: f64,

    /// Winning rule id, `null` when no rule matched
    pub rule_matched: Option<u64>,

    pub rules_evaluated: usize,
}

impl From<&PriceResponse> for PriceResponsePayload {
    fn from(response: &PriceResponse) -> Self {
        let result = &response.result;
        Self {
            variant_id: result.item_id,
            base_price: result.base_price,
            final_price: result.final_price,
            discount_pct: result.discount_pct,
            rule_matched: result.rule_matched.into(),
            rules_evaluated: result.rules_evaluated,
        }
    }
}
