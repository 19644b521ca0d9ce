//! Domain Layer
//!
//! Contains the domain models and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::ledger_gateway::LedgerGateway;
pub use models::credential::{AcceptedCredential, CredentialType};
pub use models::transaction::{Amount, LedgerTransaction, SubmittedTransaction};
pub use models::wallet::Wallet;
