//! Permissioned Domain Handlers

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;

use crate::application::use_cases::domains::CreatedDomain;
use crate::domain::models::transaction::SubmittedTransaction;
use crate::infrastructure::driving_adapters::api_rest::dto::domain::{
    CreateDomainDto, DeleteDomainDto, InspectDomainDto,
};
use crate::infrastructure::driving_adapters::api_rest::dto::ApiResponse;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for domain endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_domain))
        .route("/delete", post(delete_domain))
        .route("/inspect", get(inspect_domain).post(inspect_domain))
}

/// POST /api/domain/create - Create a permissioned domain
///
/// # Responses
///
/// * 200 OK - Validated `PermissionedDomainSet` plus `domainId`
/// * 400 Bad Request - Missing field or malformed credential list
/// * 500 Internal Server Error - Ledger failure
async fn create_domain(
    State(state): State<AppState>,
    payload: Result<Json<CreateDomainDto>, JsonRejection>,
) -> Result<Json<ApiResponse<CreatedDomain>>, ApiError> {
    let Json(dto) = payload?;
    let command = dto.into_command()?;

    let created = state.create_domain_use_case.execute(command).await?;

    Ok(Json(ApiResponse::ok(created, "Domain created successfully")))
}

/// POST /api/domain/delete - Delete a permissioned domain
async fn delete_domain(
    State(state): State<AppState>,
    payload: Result<Json<DeleteDomainDto>, JsonRejection>,
) -> Result<Json<ApiResponse<SubmittedTransaction>>, ApiError> {
    let Json(dto) = payload?;
    let command = dto.into_command()?;

    let submitted = state.delete_domain_use_case.execute(command).await?;

    Ok(Json(ApiResponse::ok(submitted, "Domain deleted successfully")))
}

/// GET|POST /api/domain/inspect - Fetch the ledger entry of a domain
async fn inspect_domain(
    State(state): State<AppState>,
    query: Result<Query<InspectDomainDto>, QueryRejection>,
    body: Option<Json<InspectDomainDto>>,
) -> Result<Json<ApiResponse<Value>>, ApiError> {
    let Query(query) = query?;
    let domain_id = InspectDomainDto::merge(query, body.map(|Json(b)| b)).into_domain_id()?;

    let entry = state.inspect_domain_use_case.execute(&domain_id).await?;

    Ok(Json(ApiResponse::ok(
        entry,
        "Domain information retrieved successfully",
    )))
}
