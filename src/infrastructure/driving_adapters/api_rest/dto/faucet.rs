//! Faucet DTOs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use super::{check, take, validate_seed};
use crate::domain::models::faucet::{FaucetOutcome, FundedWallet};
use crate::shared::errors::ApiError;

/// DTO for funding a batch of wallets
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundWalletsDto {
    /// Kept loose so that bad entries are reported per index
    #[serde(default)]
    pub wallet_seeds: Option<Value>,
}

impl FundWalletsDto {
    /// One entry per requested wallet; non-string entries become `None`
    pub fn into_seeds(self) -> Result<Vec<Option<String>>, ApiError> {
        let seeds = match self.wallet_seeds {
            None | Some(Value::Null) => {
                return Err(ApiError::BadRequest("walletSeeds is required".into()))
            }
            Some(Value::Array(seeds)) if !seeds.is_empty() => seeds,
            Some(_) => {
                return Err(ApiError::BadRequest(
                    "walletSeeds must be a non-empty array".into(),
                ))
            }
        };

        Ok(seeds
            .into_iter()
            .map(|entry| match entry {
                Value::String(seed) => Some(seed),
                _ => None,
            })
            .collect())
    }
}

/// Batch results, serialized as a bare array
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct FaucetBatchDto {
    pub results: Vec<FaucetOutcome>,
}

impl FaucetBatchDto {
    pub fn message(&self) -> String {
        let funded = self.results.iter().filter(|r| r.is_success()).count();
        format!(
            "Faucet completed successfully. Test XRP has been added to {funded}/{} wallets.",
            self.results.len()
        )
    }
}

/// DTO for funding one wallet
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FundWalletDto {
    #[validate(custom(
        function = "validate_seed",
        message = "Invalid wallet seed format. XRPL seed must start with \"s\" and be at least 25 characters long."
    ))]
    pub wallet_seed: Option<String>,
}

impl FundWalletDto {
    pub fn into_seed(self) -> Result<String, ApiError> {
        check(
            &self,
            &[self.wallet_seed.as_deref()],
            "walletSeed is required",
            &["wallet_seed"],
        )?;
        Ok(take(self.wallet_seed))
    }
}

/// Single funded wallet
#[derive(Debug, Serialize)]
pub struct FundedWalletDto {
    pub address: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
}

impl From<FundedWallet> for FundedWalletDto {
    fn from(funded: FundedWallet) -> Self {
        Self {
            address: funded.address,
            status: "success",
            balance: funded.balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn batch(body: Value) -> Result<Vec<Option<String>>, ApiError> {
        serde_json::from_value::<FundWalletsDto>(body)
            .unwrap()
            .into_seeds()
    }

    #[test]
    fn batch_requires_wallet_seeds() {
        let err = batch(json!({})).unwrap_err();
        assert_eq!(err.to_string(), "walletSeeds is required");
    }

    #[test]
    fn batch_rejects_empty_or_non_array() {
        for body in [json!({ "walletSeeds": [] }), json!({ "walletSeeds": "sAbc" })] {
            let err = batch(body).unwrap_err();
            assert_eq!(err.to_string(), "walletSeeds must be a non-empty array");
        }
    }

    #[test]
    fn batch_keeps_non_string_entries_as_none() {
        let seeds = batch(json!({ "walletSeeds": ["sAbc", 42, null] })).unwrap();
        assert_eq!(seeds, vec![Some("sAbc".to_string()), None, None]);
    }

    #[test]
    fn batch_message_counts_successes() {
        let dto = FaucetBatchDto {
            results: vec![
                FaucetOutcome::Success {
                    index: 0,
                    seed: "sEdTM1uX8p...".into(),
                    address: "rAddress".into(),
                },
                FaucetOutcome::Error {
                    index: 1,
                    seed: None,
                    error: "Invalid wallet seed format".into(),
                },
            ],
        };
        assert_eq!(
            dto.message(),
            "Faucet completed successfully. Test XRP has been added to 1/2 wallets."
        );
    }

    #[test]
    fn single_wallet_requires_seed() {
        let dto: FundWalletDto = serde_json::from_value(json!({ "walletSeed": "" })).unwrap();
        assert_eq!(dto.into_seed().unwrap_err().to_string(), "walletSeed is required");
    }

    #[test]
    fn single_wallet_checks_seed_shape() {
        let dto: FundWalletDto =
            serde_json::from_value(json!({ "walletSeed": "rNotASeedAtAllButLongEnough" })).unwrap();
        assert_eq!(
            dto.into_seed().unwrap_err().to_string(),
            "Invalid wallet seed format. XRPL seed must start with \"s\" and be at least 25 characters long."
        );
    }
}
