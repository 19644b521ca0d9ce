//! Infrastructure Layer
//!
//! Driving adapters (the axum REST API) and driven adapters (configuration
//! and the XRPL node/faucet client).

pub mod driven_adapters;
pub mod driving_adapters;
