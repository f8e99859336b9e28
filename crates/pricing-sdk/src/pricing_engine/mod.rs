//! PricingEngine - Main API for pricing requests
//!
//! # Architecture
//!
//! The module is organized into:
//! - `types`: Request/Response types (PriceRequest, PriceResponse)
//! - `engine`: Core PricingEngine implementation
//! - `tests`: Unit tests (test-only)

mod engine;
mod types;

// Re-export public types
pub use engine::PricingEngine;
pub use types::{PriceRequest, PriceResponse};

// Tests module (only compiled in test mode)
#[cfg(test)]
mod tests;
