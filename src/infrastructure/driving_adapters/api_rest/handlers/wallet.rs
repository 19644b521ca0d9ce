//! Wallet Handlers

use axum::{extract::State, routing::post, Json, Router};

use crate::infrastructure::driving_adapters::api_rest::dto::wallet::WalletResponseDto;
use crate::infrastructure::driving_adapters::api_rest::dto::ApiResponse;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for wallet endpoints
pub fn router() -> Router<AppState> {
    Router::new().route("/create", post(create_wallet))
}

/// POST /api/wallet/create - Generate a new wallet
///
/// The response carries the seed in full; it is the only time it is shown.
async fn create_wallet(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<WalletResponseDto>>, ApiError> {
    let wallet = state.create_wallet_use_case.execute()?;

    Ok(Json(ApiResponse::ok(
        WalletResponseDto::from(wallet),
        "New wallet has been created successfully",
    )))
}
