//! Ledger Gateway
//!
//! Abstract trait defining the contract for everything delegated to the
//! ledger client: key derivation, signing, submission and queries.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::models::faucet::FundedWallet;
use crate::domain::models::ledger::AccountObjectsPage;
use crate::domain::models::transaction::{LedgerTransaction, SubmittedTransaction};
use crate::domain::models::wallet::Wallet;
use crate::shared::errors::LedgerError;

/// Gateway trait for XRP Ledger operations
#[async_trait]
pub trait LedgerGateway: Send + Sync {
    /// Generate a fresh random wallet
    fn generate_wallet(&self) -> Result<Wallet, LedgerError>;

    /// Derive the wallet for a seed (surrounding whitespace is ignored)
    fn wallet_from_seed(&self, seed: &str) -> Result<Wallet, LedgerError>;

    /// Autofill, sign and submit `tx` as `signer`, then wait until validated
    async fn submit_and_wait(
        &self,
        signer: &Wallet,
        tx: &LedgerTransaction,
    ) -> Result<SubmittedTransaction, LedgerError>;

    /// Fetch one page of the objects owned by `account`
    async fn account_objects(
        &self,
        account: &str,
        marker: Option<Value>,
    ) -> Result<AccountObjectsPage, LedgerError>;

    /// Look up a ledger entry by its index
    async fn ledger_entry(&self, index: &str) -> Result<Value, LedgerError>;

    /// Ask the test-network faucet to fund `wallet`
    async fn fund_wallet(&self, wallet: &Wallet) -> Result<FundedWallet, LedgerError>;

    /// Raw `server_info` result
    async fn server_info(&self) -> Result<Value, LedgerError>;

    /// Ledger endpoint this gateway talks to
    fn endpoint(&self) -> String;

    /// Drop the cached connection; the next call reconnects
    async fn disconnect(&self);
}
