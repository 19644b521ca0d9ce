//! XRPL Client
//!
//! `LedgerGateway` implementation over rippled JSON-RPC. Key handling and
//! binary encoding are delegated to `xrpl-rust`.
//!
//! The connection is opened lazily by the first call that needs it and
//! shared by every request until [`LedgerGateway::disconnect`] drops it.

mod faucet;
mod json_rpc;
mod signer;

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Mutex;

use crate::domain::gateways::LedgerGateway;
use crate::domain::models::faucet::FundedWallet;
use crate::domain::models::ledger::{AccountObjectsPage, ACCOUNT_OBJECTS_PAGE_LIMIT};
use crate::domain::models::transaction::{LedgerTransaction, SubmittedTransaction};
use crate::domain::models::wallet::Wallet;
use crate::infrastructure::driven_adapters::config::XrplConfig;
use crate::shared::errors::LedgerError;

use json_rpc::RpcConnection;

/// XRPL client shared by all use cases
pub struct XrplClient {
    config: XrplConfig,
    connection: Mutex<Option<Arc<RpcConnection>>>,
}

impl XrplClient {
    /// Create a new client; nothing is opened until the first ledger call
    #[must_use]
    pub fn new(config: XrplConfig) -> Self {
        Self {
            config,
            connection: Mutex::new(None),
        }
    }

    /// True while a connection is cached
    pub async fn is_connected(&self) -> bool {
        self.connection.lock().await.is_some()
    }

    async fn connection(&self) -> Result<Arc<RpcConnection>, LedgerError> {
        let mut guard = self.connection.lock().await;
        if let Some(connection) = guard.as_ref() {
            return Ok(Arc::clone(connection));
        }

        let timeout = Duration::from_secs(self.config.request_timeout_secs);
        let connection = Arc::new(RpcConnection::open(&self.config.rpc_url, timeout).await?);
        *guard = Some(Arc::clone(&connection));

        Ok(connection)
    }

    fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.config.poll_interval_ms)
    }

    /// Fill `Sequence`, `Fee` and `LastLedgerSequence` the way the ledger expects
    async fn autofill(
        &self,
        rpc: &RpcConnection,
        signer: &Wallet,
        tx: &LedgerTransaction,
    ) -> Result<Value, LedgerError> {
        let mut tx_json = tx.to_json(signer.address());

        let account = rpc
            .request(
                "account_info",
                json!({ "account": signer.address(), "ledger_index": "current" }),
            )
            .await?;
        let sequence = account["account_data"]["Sequence"]
            .as_u64()
            .ok_or_else(|| LedgerError::Malformed("account_info without Sequence".into()))?;

        let fee = rpc.request("fee", json!({})).await?;
        let fee_drops = fee["drops"]["open_ledger_fee"]
            .as_str()
            .or_else(|| fee["drops"]["base_fee"].as_str())
            .ok_or_else(|| LedgerError::Malformed("fee without drops".into()))?
            .to_string();

        let current = rpc.request("ledger_current", json!({})).await?;
        let current_index = current["ledger_current_index"]
            .as_u64()
            .ok_or_else(|| LedgerError::Malformed("ledger_current without index".into()))?;

        tx_json["Sequence"] = json!(sequence);
        tx_json["Fee"] = json!(fee_drops);
        tx_json["LastLedgerSequence"] = json!(current_index + u64::from(self.config.ledger_offset));

        Ok(tx_json)
    }

    async fn validated_ledger_index(&self, rpc: &RpcConnection) -> Result<u64, LedgerError> {
        let ledger = rpc
            .request("ledger", json!({ "ledger_index": "validated" }))
            .await?;

        ledger["ledger_index"]
            .as_u64()
            .or_else(|| ledger["ledger"]["ledger_index"].as_str()?.parse().ok())
            .ok_or_else(|| LedgerError::Malformed("ledger without ledger_index".into()))
    }

    /// Poll `tx` until the ledger reports the transaction as validated
    async fn wait_for_validation(
        &self,
        rpc: &RpcConnection,
        hash: &str,
        last_ledger: u64,
        preliminary: &str,
    ) -> Result<SubmittedTransaction, LedgerError> {
        let started = Instant::now();
        let timeout = Duration::from_secs(self.config.validation_timeout_secs);

        loop {
            tokio::time::sleep(self.poll_interval()).await;

            match rpc
                .request("tx", json!({ "transaction": hash, "binary": false }))
                .await
            {
                Ok(result) if result["validated"].as_bool() == Some(true) => {
                    tracing::info!(
                        hash,
                        result = result["meta"]["TransactionResult"].as_str().unwrap_or("unknown"),
                        "Transaction validated"
                    );
                    return Ok(SubmittedTransaction {
                        hash: hash.to_string(),
                        validated: true,
                        result,
                    });
                }
                Ok(_) => {}
                Err(LedgerError::Rpc { error, .. }) if error == "txnNotFound" => {}
                Err(e) => return Err(e),
            }

            let latest = self.validated_ledger_index(rpc).await?;
            if latest > last_ledger {
                return Err(LedgerError::Expired {
                    latest,
                    last: last_ledger,
                    preliminary: preliminary.to_string(),
                });
            }

            if started.elapsed() >= timeout {
                return Err(LedgerError::Timeout(self.config.validation_timeout_secs));
            }
        }
    }
}

#[async_trait]
impl LedgerGateway for XrplClient {
    fn generate_wallet(&self) -> Result<Wallet, LedgerError> {
        signer::generate_wallet()
    }

    fn wallet_from_seed(&self, seed: &str) -> Result<Wallet, LedgerError> {
        signer::wallet_from_seed(seed)
    }

    async fn submit_and_wait(
        &self,
        signer: &Wallet,
        tx: &LedgerTransaction,
    ) -> Result<SubmittedTransaction, LedgerError> {
        let rpc = self.connection().await?;

        let prepared = self.autofill(&rpc, signer, tx).await?;
        let last_ledger = prepared["LastLedgerSequence"].as_u64().unwrap_or_default();
        let signed = signer::sign_transaction(signer, prepared)?;

        let submitted = rpc
            .request("submit", json!({ "tx_blob": signed.tx_blob }))
            .await?;
        let engine_result = submitted["engine_result"].as_str().unwrap_or("unknown");
        let engine_message = submitted["engine_result_message"].as_str().unwrap_or_default();

        tracing::debug!(
            tx_type = tx.transaction_type(),
            sequence = %signed.tx_json["Sequence"],
            fee = %signed.tx_json["Fee"],
            engine_result,
            "Transaction submitted"
        );

        if engine_result.starts_with("tem") {
            return Err(LedgerError::Rejected {
                result: engine_result.to_string(),
                message: engine_message.to_string(),
            });
        }

        let hash = submitted["tx_json"]["hash"]
            .as_str()
            .ok_or_else(|| LedgerError::Malformed("submit without tx_json.hash".into()))?;

        self.wait_for_validation(&rpc, hash, last_ledger, engine_result)
            .await
    }

    async fn account_objects(
        &self,
        account: &str,
        marker: Option<Value>,
    ) -> Result<AccountObjectsPage, LedgerError> {
        let rpc = self.connection().await?;

        let mut params = json!({
            "account": account,
            "ledger_index": "validated",
            "limit": ACCOUNT_OBJECTS_PAGE_LIMIT,
        });
        if let Some(marker) = marker {
            params["marker"] = marker;
        }

        let mut result = rpc.request("account_objects", params).await?;
        let objects = match result["account_objects"].take() {
            Value::Array(objects) => objects,
            _ => Vec::new(),
        };
        let marker = match result["marker"].take() {
            Value::Null => None,
            marker => Some(marker),
        };

        Ok(AccountObjectsPage { objects, marker })
    }

    async fn ledger_entry(&self, index: &str) -> Result<Value, LedgerError> {
        let rpc = self.connection().await?;
        rpc.request(
            "ledger_entry",
            json!({ "index": index, "ledger_index": "validated" }),
        )
        .await
    }

    async fn fund_wallet(&self, wallet: &Wallet) -> Result<FundedWallet, LedgerError> {
        let rpc = self.connection().await?;
        faucet::fund(&rpc, &self.config, wallet.address()).await
    }

    async fn server_info(&self) -> Result<Value, LedgerError> {
        let rpc = self.connection().await?;
        rpc.request("server_info", json!({})).await
    }

    fn endpoint(&self) -> String {
        self.config.rpc_url.clone()
    }

    async fn disconnect(&self) {
        if self.connection.lock().await.take().is_some() {
            tracing::info!(url = %self.config.rpc_url, "Disconnected from XRPL node");
        }
    }
}
