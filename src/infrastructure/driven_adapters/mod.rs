//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Configuration
//! - XRPL node and faucet client

pub mod config;
pub mod xrpl_client;

pub use config::{AppConfig, LogFormat, XrplConfig};
pub use xrpl_client::XrplClient;
