//! Stub ledger gateway shared by the use case unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::domain::gateways::LedgerGateway;
use crate::domain::models::faucet::FundedWallet;
use crate::domain::models::ledger::AccountObjectsPage;
use crate::domain::models::transaction::{LedgerTransaction, SubmittedTransaction};
use crate::domain::models::wallet::Wallet;
use crate::shared::errors::LedgerError;

/// Seeds starting with this prefix fail to derive
pub const BAD_SEED_PREFIX: &str = "sBad";

pub struct StubLedger {
    pub submitted: Mutex<Vec<(String, LedgerTransaction)>>,
    pub requested_markers: Mutex<Vec<Option<Value>>>,
    submit_results: Mutex<VecDeque<Result<SubmittedTransaction, LedgerError>>>,
    pages: Mutex<VecDeque<AccountObjectsPage>>,
    ledger_entry_result: Mutex<Option<Result<Value, LedgerError>>>,
    fund_failures: Mutex<Vec<String>>,
    server_info_result: Mutex<Option<Result<Value, LedgerError>>>,
}

impl StubLedger {
    pub fn new() -> Self {
        Self {
            submitted: Mutex::new(Vec::new()),
            requested_markers: Mutex::new(Vec::new()),
            submit_results: Mutex::new(VecDeque::new()),
            pages: Mutex::new(VecDeque::new()),
            ledger_entry_result: Mutex::new(None),
            fund_failures: Mutex::new(Vec::new()),
            server_info_result: Mutex::new(None),
        }
    }

    pub fn with_submit(self, result: Result<SubmittedTransaction, LedgerError>) -> Self {
        self.submit_results.lock().unwrap().push_back(result);
        self
    }

    pub fn with_page(self, page: AccountObjectsPage) -> Self {
        self.pages.lock().unwrap().push_back(page);
        self
    }

    pub fn with_ledger_entry(self, result: Result<Value, LedgerError>) -> Self {
        *self.ledger_entry_result.lock().unwrap() = Some(result);
        self
    }

    /// Make funding fail for the wallet derived from `seed`
    pub fn with_fund_failure(self, seed: &str) -> Self {
        self.fund_failures.lock().unwrap().push(address_for(seed));
        self
    }

    pub fn with_server_info(self, result: Result<Value, LedgerError>) -> Self {
        *self.server_info_result.lock().unwrap() = Some(result);
        self
    }

    pub fn last_submitted(&self) -> Option<(String, LedgerTransaction)> {
        self.submitted.lock().unwrap().last().cloned()
    }
}

pub fn address_for(seed: &str) -> String {
    format!("rStub{}", seed.trim())
}

pub fn validated(hash: &str) -> SubmittedTransaction {
    SubmittedTransaction {
        hash: hash.to_string(),
        validated: true,
        result: json!({
            "hash": hash,
            "validated": true,
            "meta": { "TransactionResult": "tesSUCCESS", "AffectedNodes": [] }
        }),
    }
}

#[async_trait]
impl LedgerGateway for StubLedger {
    fn generate_wallet(&self) -> Result<Wallet, LedgerError> {
        Ok(Wallet::new(
            "rGeneratedWalletAddress000000000".into(),
            "ED0000".into(),
            "ED1111".into(),
            "sEdGeneratedSeed0000000000000".into(),
        ))
    }

    fn wallet_from_seed(&self, seed: &str) -> Result<Wallet, LedgerError> {
        let seed = seed.trim();
        if seed.starts_with(BAD_SEED_PREFIX) {
            return Err(LedgerError::InvalidSeed("checksum mismatch".into()));
        }
        Ok(Wallet::new(
            address_for(seed),
            "ED0000".into(),
            "ED1111".into(),
            seed.to_string(),
        ))
    }

    async fn submit_and_wait(
        &self,
        signer: &Wallet,
        tx: &LedgerTransaction,
    ) -> Result<SubmittedTransaction, LedgerError> {
        self.submitted
            .lock()
            .unwrap()
            .push((signer.address().to_string(), tx.clone()));
        self.submit_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(validated("HASH")))
    }

    async fn account_objects(
        &self,
        _account: &str,
        marker: Option<Value>,
    ) -> Result<AccountObjectsPage, LedgerError> {
        self.requested_markers.lock().unwrap().push(marker);
        Ok(self.pages.lock().unwrap().pop_front().unwrap_or_default())
    }

    async fn ledger_entry(&self, _index: &str) -> Result<Value, LedgerError> {
        self.ledger_entry_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(json!({})))
    }

    async fn fund_wallet(&self, wallet: &Wallet) -> Result<FundedWallet, LedgerError> {
        if self
            .fund_failures
            .lock()
            .unwrap()
            .iter()
            .any(|a| a == wallet.address())
        {
            return Err(LedgerError::Faucet("rate limited".into()));
        }
        Ok(FundedWallet {
            address: wallet.address().to_string(),
            balance: Some(100.0),
        })
    }

    async fn server_info(&self) -> Result<Value, LedgerError> {
        self.server_info_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(json!({ "info": { "server_state": "full" } })))
    }

    fn endpoint(&self) -> String {
        "http://stub.ledger".to_string()
    }

    async fn disconnect(&self) {}
}
