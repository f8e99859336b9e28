//! API endpoint handlers

use super::extractors::PricingJson;
use super::types::*;
use crate::error::ServerError;
use axum::{extract::State, Json};
use pricing_sdk::{CacheStats, PriceRequest};
use tracing::info;

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "store-pricing-engine".to_string(),
        status: "ok".to_string(),
    })
}

/// Pricing endpoint
#[axum::debug_handler]
pub(super) async fn price(
    State(state): State<AppState>,
    PricingJson(payload): PricingJson<PriceRequestPayload>,
) -> Result<Json<PriceResponsePayload>, ServerError> {
    info!(
        "Received pricing request for variant {} (session {})",
        payload.variant_id,
        payload.session_id.as_deref().unwrap_or("-")
    );

    let request = PriceRequest::from(payload);
    let response = state.engine.price(request).await?;

    Ok(Json(PriceResponsePayload::from(&response)))
}

/// Decision cache statistics endpoint
pub(super) async fn cache_stats(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.engine.stats().await)
}
