//! Health Handler

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::application::use_cases::health::HealthReport;
use crate::infrastructure::driving_adapters::api_rest::dto::ApiResponse;
use crate::infrastructure::driving_adapters::api_rest::AppState;

/// Create the router for the health endpoint
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health))
}

/// GET /api/health - Probe the ledger connection
///
/// # Responses
///
/// * 200 OK - Ledger answered `server_info`
/// * 503 Service Unavailable - Ledger unreachable; the report carries the error
async fn health(State(state): State<AppState>) -> (StatusCode, Json<ApiResponse<HealthReport>>) {
    let report = state.check_health_use_case.execute().await;

    if report.is_healthy() {
        (
            StatusCode::OK,
            Json(ApiResponse::ok(report, "Server is healthy")),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse::ok(report, "Server is unhealthy")),
        )
    }
}
