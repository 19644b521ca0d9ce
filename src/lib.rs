//! XRPL Gateway API
//!
//! An HTTP façade over the XRP Ledger: wallet generation, test-network
//! funding, XRP and issued-currency payments, credentials and permissioned
//! domains. Signing and binary encoding are delegated to `xrpl-rust`; the
//! service itself only validates requests and reshapes ledger results.
//!
//! Layout follows Clean/Hexagonal Architecture:
//! - [`domain`]: models and the [`domain::LedgerGateway`] port
//! - [`application`]: one use case per operation
//! - [`infrastructure`]: axum REST API, configuration, XRPL client
//! - [`shared`]: error types and friendly error mapping

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
