//! Test-network faucet

use std::time::Duration;

use serde::Serialize;
use serde_json::{json, Value};

use super::json_rpc::RpcConnection;
use crate::domain::models::faucet::FundedWallet;
use crate::infrastructure::driven_adapters::config::XrplConfig;
use crate::shared::errors::LedgerError;

const DROPS_PER_XRP: f64 = 1_000_000.0;

#[derive(Debug, Serialize)]
struct FaucetRequest<'a> {
    destination: &'a str,
}

/// Ask the faucet to fund `address` and wait until its balance goes up
pub async fn fund(
    rpc: &RpcConnection,
    config: &XrplConfig,
    address: &str,
) -> Result<FundedWallet, LedgerError> {
    let starting = balance_drops(rpc, address).await?;

    let response = rpc
        .http_client()
        .post(&config.faucet_url)
        .json(&FaucetRequest {
            destination: address,
        })
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(LedgerError::Faucet(format!(
            "request failed with status {status}: {body}"
        )));
    }
    tracing::debug!(address, "Faucet accepted funding request");

    let interval = Duration::from_millis(config.poll_interval_ms);
    for _ in 0..config.faucet_poll_attempts {
        tokio::time::sleep(interval).await;

        let current = balance_drops(rpc, address).await?;
        if current > starting {
            return Ok(FundedWallet {
                address: address.to_string(),
                balance: Some(drops_to_xrp(current)),
            });
        }
    }

    let waited = interval.as_secs_f64() * f64::from(config.faucet_poll_attempts);
    Err(LedgerError::Faucet(format!(
        "Unable to fund address with faucet after waiting {waited:.0} seconds"
    )))
}

/// Current balance in drops; accounts the ledger does not know yet hold 0
async fn balance_drops(rpc: &RpcConnection, address: &str) -> Result<u64, LedgerError> {
    match rpc
        .request(
            "account_info",
            json!({ "account": address, "ledger_index": "validated" }),
        )
        .await
    {
        Ok(info) => parse_drops(&info["account_data"]["Balance"]),
        Err(e) if e.is_account_not_found() => Ok(0),
        Err(e) => Err(e),
    }
}

fn parse_drops(balance: &Value) -> Result<u64, LedgerError> {
    balance
        .as_str()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| LedgerError::Malformed(format!("unexpected balance {balance}")))
}

#[allow(clippy::cast_precision_loss)]
fn drops_to_xrp(drops: u64) -> f64 {
    drops as f64 / DROPS_PER_XRP
}
