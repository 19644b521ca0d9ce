//! Fund Wallet Use Case
//!
//! Funds a single test-network wallet from the faucet.

use std::sync::Arc;

use crate::domain::gateways::LedgerGateway;
use crate::domain::models::faucet::FundedWallet;
use crate::domain::models::wallet::mask_seed;
use crate::shared::errors::{ErrorHints, UseCaseError};

/// Use case for funding one wallet
pub struct FundWalletUseCase {
    ledger: Arc<dyn LedgerGateway>,
}

impl FundWalletUseCase {
    /// Create a new FundWalletUseCase
    #[must_use]
    pub fn new(ledger: Arc<dyn LedgerGateway>) -> Self {
        Self { ledger }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Friendly` for seed decoding problems and
    /// `UseCaseError::Ledger` for faucet or network failures.
    pub async fn execute(&self, wallet_seed: &str) -> Result<FundedWallet, UseCaseError> {
        tracing::info!(seed = %mask_seed(wallet_seed), "Funding wallet from faucet");

        let wallet = self
            .ledger
            .wallet_from_seed(wallet_seed)
            .map_err(|e| UseCaseError::from_ledger(e, ErrorHints::Seed))?;

        let funded = self
            .ledger
            .fund_wallet(&wallet)
            .await
            .map_err(|e| UseCaseError::from_ledger(e, ErrorHints::Seed))?;

        tracing::info!(address = %funded.address, balance = ?funded.balance, "Wallet funded");
        Ok(funded)
    }
}
