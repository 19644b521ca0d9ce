//! Credential Handlers

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;

use crate::domain::models::transaction::SubmittedTransaction;
use crate::infrastructure::driving_adapters::api_rest::dto::credential::{
    CheckCredentialsDto, CreateCredentialDto, SubjectCredentialDto,
};
use crate::infrastructure::driving_adapters::api_rest::dto::ApiResponse;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for credential endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_credential))
        .route("/accept", post(accept_credential))
        .route("/check", get(check_credentials).post(check_credentials))
        .route("/delete", post(delete_credential))
}

/// POST /api/credential/create - Issue a credential to a subject
///
/// `expiration` is ledger time: seconds since 2000-01-01T00:00:00Z (the
/// Ripple epoch), not Unix time. When omitted it defaults to one hour from
/// now. `uri` is plain text and is hex-encoded before submission.
///
/// # Responses
///
/// * 200 OK - Validated `CredentialCreate`
/// * 400 Bad Request - Missing field or malformed seed/address
/// * 500 Internal Server Error - Ledger failure
async fn create_credential(
    State(state): State<AppState>,
    payload: Result<Json<CreateCredentialDto>, JsonRejection>,
) -> Result<Json<ApiResponse<SubmittedTransaction>>, ApiError> {
    let Json(dto) = payload?;
    let command = dto.into_command()?;

    let submitted = state.create_credential_use_case.execute(command).await?;

    Ok(Json(ApiResponse::ok(
        submitted,
        "Credential created successfully",
    )))
}

/// POST /api/credential/accept - Subject accepts an issued credential
async fn accept_credential(
    State(state): State<AppState>,
    payload: Result<Json<SubjectCredentialDto>, JsonRejection>,
) -> Result<Json<ApiResponse<SubmittedTransaction>>, ApiError> {
    let Json(dto) = payload?;
    let command = dto.into_accept_command()?;

    let submitted = state.accept_credential_use_case.execute(command).await?;

    Ok(Json(ApiResponse::ok(
        submitted,
        "Credential accepted successfully",
    )))
}

/// GET|POST /api/credential/check - List the credentials held by `userSeed`
///
/// `userSeed` is read from the query string, then from a JSON body.
async fn check_credentials(
    State(state): State<AppState>,
    query: Result<Query<CheckCredentialsDto>, QueryRejection>,
    body: Option<Json<CheckCredentialsDto>>,
) -> Result<Json<ApiResponse<Vec<Value>>>, ApiError> {
    let Query(query) = query?;
    let seed = CheckCredentialsDto::merge(query, body.map(|Json(b)| b)).into_seed()?;

    let credentials = state.check_credentials_use_case.execute(&seed).await?;

    Ok(Json(ApiResponse::ok(
        credentials,
        "Credentials retrieved successfully",
    )))
}

/// POST /api/credential/delete - Subject deletes a credential
async fn delete_credential(
    State(state): State<AppState>,
    payload: Result<Json<SubjectCredentialDto>, JsonRejection>,
) -> Result<Json<ApiResponse<SubmittedTransaction>>, ApiError> {
    let Json(dto) = payload?;
    let command = dto.into_delete_command()?;

    let submitted = state.delete_credential_use_case.execute(command).await?;

    Ok(Json(ApiResponse::ok(
        submitted,
        "Credential deleted successfully",
    )))
}
