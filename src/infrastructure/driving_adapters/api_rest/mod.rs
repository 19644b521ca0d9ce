//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::use_cases::{
    AcceptCredentialUseCase, CheckCredentialsUseCase, CheckHealthUseCase, CreateCredentialUseCase,
    CreateDomainUseCase, CreateWalletUseCase, DeleteCredentialUseCase, DeleteDomainUseCase,
    FundWalletUseCase, FundWalletsUseCase, InspectDomainUseCase, SendIouUseCase, SendXrpUseCase,
};
use crate::domain::gateways::LedgerGateway;
use handlers::{credential, domain, faucet, health, payment, root, wallet};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub check_health_use_case: Arc<CheckHealthUseCase>,
    pub create_wallet_use_case: Arc<CreateWalletUseCase>,
    pub fund_wallet_use_case: Arc<FundWalletUseCase>,
    pub fund_wallets_use_case: Arc<FundWalletsUseCase>,
    pub send_xrp_use_case: Arc<SendXrpUseCase>,
    pub send_iou_use_case: Arc<SendIouUseCase>,
    pub create_credential_use_case: Arc<CreateCredentialUseCase>,
    pub accept_credential_use_case: Arc<AcceptCredentialUseCase>,
    pub check_credentials_use_case: Arc<CheckCredentialsUseCase>,
    pub delete_credential_use_case: Arc<DeleteCredentialUseCase>,
    pub create_domain_use_case: Arc<CreateDomainUseCase>,
    pub delete_domain_use_case: Arc<DeleteDomainUseCase>,
    pub inspect_domain_use_case: Arc<InspectDomainUseCase>,
}

impl AppState {
    /// Wire every use case to the same ledger gateway
    pub fn new(ledger: Arc<dyn LedgerGateway>) -> Self {
        Self {
            check_health_use_case: Arc::new(CheckHealthUseCase::new(ledger.clone())),
            create_wallet_use_case: Arc::new(CreateWalletUseCase::new(ledger.clone())),
            fund_wallet_use_case: Arc::new(FundWalletUseCase::new(ledger.clone())),
            fund_wallets_use_case: Arc::new(FundWalletsUseCase::new(ledger.clone())),
            send_xrp_use_case: Arc::new(SendXrpUseCase::new(ledger.clone())),
            send_iou_use_case: Arc::new(SendIouUseCase::new(ledger.clone())),
            create_credential_use_case: Arc::new(CreateCredentialUseCase::new(ledger.clone())),
            accept_credential_use_case: Arc::new(AcceptCredentialUseCase::new(ledger.clone())),
            check_credentials_use_case: Arc::new(CheckCredentialsUseCase::new(ledger.clone())),
            delete_credential_use_case: Arc::new(DeleteCredentialUseCase::new(ledger.clone())),
            create_domain_use_case: Arc::new(CreateDomainUseCase::new(ledger.clone())),
            delete_domain_use_case: Arc::new(DeleteDomainUseCase::new(ledger.clone())),
            inspect_domain_use_case: Arc::new(InspectDomainUseCase::new(ledger)),
        }
    }
}

/// Build the full application router
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
        ]);

    Router::new()
        .route("/", get(root::banner))
        .nest("/api/health", health::router())
        .nest("/api/wallet", wallet::router())
        .nest("/api/faucet", faucet::router())
        .nest("/api/payment", payment::router())
        .nest("/api/credential", credential::router())
        .nest("/api/domain", domain::router())
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(cors)
        .with_state(state)
}
