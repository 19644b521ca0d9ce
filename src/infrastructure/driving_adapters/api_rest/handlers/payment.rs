//! Payment Handlers

use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};

use crate::domain::models::transaction::SubmittedTransaction;
use crate::infrastructure::driving_adapters::api_rest::dto::payment::{SendIouDto, SendXrpDto};
use crate::infrastructure::driving_adapters::api_rest::dto::ApiResponse;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for payment endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/send-xrp", post(send_xrp))
        .route("/send-iou", post(send_iou))
}

/// POST /api/payment/send-xrp - Send XRP (amount in drops)
///
/// # Responses
///
/// * 200 OK - Validated transaction
/// * 400 Bad Request - Missing field or malformed seed/address
/// * 500 Internal Server Error - Ledger failure, rewritten when recognised
async fn send_xrp(
    State(state): State<AppState>,
    payload: Result<Json<SendXrpDto>, JsonRejection>,
) -> Result<Json<ApiResponse<SubmittedTransaction>>, ApiError> {
    let Json(dto) = payload?;
    let command = dto.into_command()?;

    let submitted = state.send_xrp_use_case.execute(command).await?;

    Ok(Json(ApiResponse::ok(submitted, "XRP payment successful")))
}

/// POST /api/payment/send-iou - Send an issued currency
async fn send_iou(
    State(state): State<AppState>,
    payload: Result<Json<SendIouDto>, JsonRejection>,
) -> Result<Json<ApiResponse<SubmittedTransaction>>, ApiError> {
    let Json(dto) = payload?;
    let command = dto.into_command()?;

    let submitted = state.send_iou_use_case.execute(command).await?;

    Ok(Json(ApiResponse::ok(submitted, "IOU payment successful")))
}
