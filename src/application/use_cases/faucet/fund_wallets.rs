//! Fund Wallets Use Case
//!
//! Funds a batch of wallets one after another. A failing entry is reported
//! in its outcome and does not stop the batch.

use std::sync::Arc;

use crate::domain::gateways::LedgerGateway;
use crate::domain::models::faucet::FaucetOutcome;
use crate::domain::models::wallet::mask_seed;

/// Use case for funding several wallets
pub struct FundWalletsUseCase {
    ledger: Arc<dyn LedgerGateway>,
}

impl FundWalletsUseCase {
    /// Create a new FundWalletsUseCase
    #[must_use]
    pub fn new(ledger: Arc<dyn LedgerGateway>) -> Self {
        Self { ledger }
    }

    /// Execute the use case
    ///
    /// `seeds` holds one entry per requested wallet; `None` marks an entry
    /// that was not a string.
    pub async fn execute(&self, seeds: Vec<Option<String>>) -> Vec<FaucetOutcome> {
        tracing::info!(wallets = seeds.len(), "Funding wallets from faucet");

        let mut outcomes = Vec::with_capacity(seeds.len());
        for (index, entry) in seeds.into_iter().enumerate() {
            let outcome = match entry {
                Some(seed) if !seed.trim().is_empty() => self.fund_one(index, &seed).await,
                _ => {
                    tracing::warn!(index, "Invalid wallet seed entry");
                    FaucetOutcome::Error {
                        index,
                        seed: None,
                        error: "Invalid wallet seed format".to_string(),
                    }
                }
            };
            outcomes.push(outcome);
        }

        let funded = outcomes.iter().filter(|o| o.is_success()).count();
        tracing::info!(funded, total = outcomes.len(), "Faucet batch completed");
        outcomes
    }

    async fn fund_one(&self, index: usize, seed: &str) -> FaucetOutcome {
        let masked = mask_seed(seed);

        let result = match self.ledger.wallet_from_seed(seed) {
            Ok(wallet) => self.ledger.fund_wallet(&wallet).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(funded) => {
                tracing::debug!(index, address = %funded.address, "Wallet funded");
                FaucetOutcome::Success {
                    index,
                    seed: masked,
                    address: funded.address,
                }
            }
            Err(e) => {
                tracing::warn!(index, seed = %masked, error = %e, "Funding wallet failed");
                FaucetOutcome::Error {
                    index,
                    seed: Some(masked),
                    error: e.to_string(),
                }
            }
        }
    }
}
