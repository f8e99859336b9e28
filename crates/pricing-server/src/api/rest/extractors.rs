//! Request body extraction
//!
//! `PricingJson` wraps axum's `Json` so that an unreadable pricing payload is
//! answered with the same `{error, status}` body as every other rejected
//! pricing request.

use crate::error::ServerError;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

/// Shape of the `/price` body, quoted in rejection messages
pub const PRICE_BODY_SHAPE: &str =
    "{variant_id: integer, base_price: number, cart_total: number, session_id?: string}";

/// JSON body extractor for pricing payloads
pub struct PricingJson<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for PricingJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(describe_rejection)?;
        Ok(Self(value))
    }
}

fn describe_rejection(rejection: JsonRejection) -> ServerError {
    let message = match &rejection {
        JsonRejection::JsonDataError(err) => format!(
            "Pricing payload must be {}: {}",
            PRICE_BODY_SHAPE,
            err.body_text()
        ),
        JsonRejection::JsonSyntaxError(err) => {
            format!("Pricing payload is not valid JSON: {}", err.body_text())
        }
        JsonRejection::MissingJsonContentType(_) => {
            "Pricing payload requires 'Content-Type: application/json'".to_string()
        }
        other => format!("Pricing payload could not be read: {}", other.body_text()),
    };

    tracing::warn!("Rejected pricing payload: {}", message);
    ServerError::InvalidRequest(message)
}
