//! Create Wallet Use Case
//!
//! Generates a fresh wallet. Nothing is submitted to the ledger; the account
//! only exists once it has been funded.

use std::sync::Arc;

use crate::domain::gateways::LedgerGateway;
use crate::domain::models::wallet::Wallet;
use crate::shared::errors::{ErrorHints, UseCaseError};

/// Use case for generating a new wallet
pub struct CreateWalletUseCase {
    ledger: Arc<dyn LedgerGateway>,
}

impl CreateWalletUseCase {
    /// Create a new CreateWalletUseCase
    #[must_use]
    pub fn new(ledger: Arc<dyn LedgerGateway>) -> Self {
        Self { ledger }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Ledger` if the SDK fails to generate key material.
    pub fn execute(&self) -> Result<Wallet, UseCaseError> {
        tracing::info!("Creating new wallet");

        let wallet = self
            .ledger
            .generate_wallet()
            .map_err(|e| UseCaseError::from_ledger(e, ErrorHints::None))?;

        tracing::info!(address = %wallet.address(), "New wallet created");
        Ok(wallet)
    }
}
