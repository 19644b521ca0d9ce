//! Service Banner

use axum::Json;
use serde::Serialize;

const ENDPOINTS: &[&str] = &[
    "GET /api/health",
    "POST /api/wallet/create",
    "POST /api/faucet",
    "POST /api/faucet/wallet",
    "POST /api/payment/send-xrp",
    "POST /api/payment/send-iou",
    "POST /api/credential/create",
    "POST /api/credential/accept",
    "GET /api/credential/check",
    "POST /api/credential/delete",
    "POST /api/domain/create",
    "POST /api/domain/delete",
    "GET /api/domain/inspect",
];

#[derive(Debug, Serialize)]
pub struct BannerDto {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: &'static [&'static str],
}

/// GET / - Service banner and endpoint list
pub async fn banner() -> Json<BannerDto> {
    Json(BannerDto {
        message: "XRPL Server is running!",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: ENDPOINTS,
    })
}
