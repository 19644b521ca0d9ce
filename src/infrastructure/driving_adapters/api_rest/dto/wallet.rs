//! Wallet DTOs

use serde::Serialize;

use crate::domain::models::wallet::Wallet;

/// A freshly generated wallet, seed included
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletResponseDto {
    pub address: String,
    pub seed: String,
    pub public_key: String,
    pub status: &'static str,
}

impl From<Wallet> for WalletResponseDto {
    fn from(wallet: Wallet) -> Self {
        Self {
            address: wallet.address().to_string(),
            seed: wallet.seed().to_string(),
            public_key: wallet.public_key().to_string(),
            status: "success",
        }
    }
}
