//! Faucet Models
//!
//! Results of funding test-network wallets.

use serde::Serialize;

/// A wallet the faucet has funded
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundedWallet {
    pub address: String,
    /// Balance in XRP observed after funding, when the ledger reported one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
}

/// Outcome of one entry of a batch funding request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase", tag = "status")]
pub enum FaucetOutcome {
    Success {
        index: usize,
        seed: String,
        address: String,
    },
    Error {
        index: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        seed: Option<String>,
        error: String,
    },
}

impl FaucetOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
