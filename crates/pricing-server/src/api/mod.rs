//! HTTP API surfaces

pub mod rest;

pub use rest::create_router;
