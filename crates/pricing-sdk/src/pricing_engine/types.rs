//! Request/Response types for PricingEngine

use pricing_runtime::{CacheStats, PricingResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Pricing request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRequest {
    /// Item (product variant) being priced
    pub item_id: i64,

    /// Catalog list price of the item
    pub base_price: f64,

    /// Cart subtotal before this item
    pub cart_total: f64,

    /// Caller session, carried into logs only
    #[serde(default)]
    pub session_id: Option<String>,
}

impl PriceRequest {
    /// Create a new pricing request
    pub fn new(item_id: i64, base_price: f64, cart_total: f64) -> Self {
        Self {
            item_id,
            base_price,
            cart_total,
            session_id: None,
        }
    }

    /// Attach a session id
    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }
}

/// Pricing response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceResponse {
    /// Id of the audit record written for this request
    pub decision_id: Uuid,

    /// Evaluation result
    pub result: PricingResult,

    /// Cache statistics read right after the audit record was stored
    pub cache_stats: CacheStats,
}
