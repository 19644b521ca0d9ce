//! Common test utilities for e2e tests
//!
//! Provides a mockall ledger gateway and a test application wired to it.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use mockall::mock;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use xrpl_gateway::domain::gateways::LedgerGateway;
use xrpl_gateway::domain::models::faucet::FundedWallet;
use xrpl_gateway::domain::models::ledger::AccountObjectsPage;
use xrpl_gateway::domain::models::transaction::{LedgerTransaction, SubmittedTransaction};
use xrpl_gateway::domain::models::wallet::Wallet;
use xrpl_gateway::infrastructure::driving_adapters::api_rest::{self, AppState};
use xrpl_gateway::shared::errors::LedgerError;

pub const SENDER_SEED: &str = "sEdTM1uX8pu2do5XvTnutH6HsouMaM2";
pub const SENDER_ADDRESS: &str = "rSenderAddressDerivedFromSeed0001";
pub const RECEIVER_ADDRESS: &str = "rPT1Sjq2YGrBMTttX4GZHjKu9dyfzbpAYe";
pub const ISSUER_ADDRESS: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";

mock! {
    pub Ledger {}

    #[async_trait]
    impl LedgerGateway for Ledger {
        fn generate_wallet(&self) -> Result<Wallet, LedgerError>;
        fn wallet_from_seed(&self, seed: &str) -> Result<Wallet, LedgerError>;
        async fn submit_and_wait(
            &self,
            signer: &Wallet,
            tx: &LedgerTransaction,
        ) -> Result<SubmittedTransaction, LedgerError>;
        async fn account_objects(
            &self,
            account: &str,
            marker: Option<Value>,
        ) -> Result<AccountObjectsPage, LedgerError>;
        async fn ledger_entry(&self, index: &str) -> Result<Value, LedgerError>;
        async fn fund_wallet(&self, wallet: &Wallet) -> Result<FundedWallet, LedgerError>;
        async fn server_info(&self) -> Result<Value, LedgerError>;
        fn endpoint(&self) -> String;
        async fn disconnect(&self);
    }
}

/// Wallet the mock hands out for any seed
pub fn sender_wallet(seed: &str) -> Wallet {
    Wallet::new(
        SENDER_ADDRESS.to_string(),
        "ED5F5AC8B98974A3CA843326D9B88CEBD0560177B973EE0B149F782CFAA06DC66A".to_string(),
        "EDB4C4E046826BD26190D09715FC31F4E6A728204EADD112905B08B14B7F15C4F3".to_string(),
        seed.trim().to_string(),
    )
}

/// A validated transaction as the ledger would report it
pub fn validated_tx(hash: &str) -> SubmittedTransaction {
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

/// A mock whose seed derivation always succeeds
pub fn ledger_with_wallets() -> MockLedger {
    let mut ledger = MockLedger::new();
    ledger
        .expect_wallet_from_seed()
        .returning(|seed| Ok(sender_wallet(seed)));
    ledger
        .expect_endpoint()
        .returning(|| "http://mock.ledger".to_string());
    ledger
}

/// Test application context
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    /// Build the full router around `ledger`
    pub fn new(ledger: MockLedger) -> Self {
        let state = AppState::new(Arc::new(ledger));
        Self {
            router: api_rest::router(state),
        }
    }

    /// POST a JSON body, returning status and parsed body
    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// POST a raw body with a JSON content type
    pub async fn post_raw(&self, uri: &str, body: &'static str) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method(Method::GET)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, json)
    }
}

/// Assert the standard error envelope
pub fn assert_error(body: &Value, status: StatusCode, message: &str) {
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], message);
    assert_eq!(body["message"], message);
    assert_eq!(body["status"], status.as_u16());
    assert!(body["timestamp"].is_string());
}
