//! HTTP Handlers
//!
//! One module per resource; each exposes a `router()` nested under `/api`.

pub mod credential;
pub mod domain;
pub mod faucet;
pub mod health;
pub mod payment;
pub mod root;
pub mod wallet;
