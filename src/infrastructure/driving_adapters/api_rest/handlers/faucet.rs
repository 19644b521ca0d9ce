//! Faucet Handlers

use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};

use crate::infrastructure::driving_adapters::api_rest::dto::faucet::{
    FaucetBatchDto, FundWalletDto, FundWalletsDto, FundedWalletDto,
};
use crate::infrastructure::driving_adapters::api_rest::dto::ApiResponse;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for faucet endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(fund_wallets))
        .route("/wallet", post(fund_wallet))
}

/// POST /api/faucet - Fund several wallets
///
/// # Responses
///
/// * 200 OK - Per-wallet outcomes, failures included
/// * 400 Bad Request - `walletSeeds` missing or not a non-empty array
async fn fund_wallets(
    State(state): State<AppState>,
    payload: Result<Json<FundWalletsDto>, JsonRejection>,
) -> Result<Json<ApiResponse<FaucetBatchDto>>, ApiError> {
    let Json(dto) = payload?;
    let seeds = dto.into_seeds()?;

    let batch = FaucetBatchDto {
        results: state.fund_wallets_use_case.execute(seeds).await,
    };
    let message = batch.message();

    Ok(Json(ApiResponse::ok(batch, message)))
}

/// POST /api/faucet/wallet - Fund one wallet
///
/// # Responses
///
/// * 200 OK - Wallet funded
/// * 400 Bad Request - `walletSeed` missing or malformed
/// * 500 Internal Server Error - Seed rejected by the ledger SDK or faucet failure
async fn fund_wallet(
    State(state): State<AppState>,
    payload: Result<Json<FundWalletDto>, JsonRejection>,
) -> Result<Json<ApiResponse<FundedWalletDto>>, ApiError> {
    let Json(dto) = payload?;
    let seed = dto.into_seed()?;

    let funded = state.fund_wallet_use_case.execute(&seed).await?;

    Ok(Json(ApiResponse::ok(
        FundedWalletDto::from(funded),
        "Test XRP has been added to the wallet",
    )))
}
