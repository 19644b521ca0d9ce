//! Error Types
//!
//! Layered error types with HTTP status code mapping and the JSON error envelope.

mod hints;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

pub use hints::ErrorHints;

/// Driven-adapter errors raised while talking to the ledger or its SDK
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invalid seed: {0}")]
    InvalidSeed(String),

    #[error("Wallet error: {0}")]
    Wallet(String),

    #[error("Encoding error: {0}")]
    Codec(String),

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{error}: {message}")]
    Rpc { error: String, message: String },

    #[error("Transaction failed, {result}: {message}")]
    Rejected { result: String, message: String },

    #[error(
        "The latest ledger sequence {latest} is greater than the transaction's LastLedgerSequence ({last}).\nPreliminary result: {preliminary}"
    )]
    Expired {
        latest: u64,
        last: u64,
        preliminary: String,
    },

    #[error("Faucet error: {0}")]
    Faucet(String),

    #[error("Unexpected ledger response: {0}")]
    Malformed(String),

    #[error("Timed out after {0}s waiting for the ledger")]
    Timeout(u64),
}

impl LedgerError {
    /// True when rippled reports the account as unknown (unfunded)
    #[must_use]
    pub fn is_account_not_found(&self) -> bool {
        matches!(self, Self::Rpc { error, .. } if error == "actNotFound")
    }
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("{0}")]
    Validation(String),

    /// Ledger failure rewritten into a message a wallet user can act on
    #[error("{message}")]
    Friendly { message: String, original: String },

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl UseCaseError {
    /// Map a ledger error through the friendly-message table for `hints`
    #[must_use]
    pub fn from_ledger(err: LedgerError, hints: ErrorHints) -> Self {
        let original = err.to_string();
        match hints.rewrite(&original) {
            Some(message) => Self::Friendly {
                message: message.to_string(),
                original,
            },
            None => Self::Ledger(err),
        }
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Friendly { .. } | Self::Ledger(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("{0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Convert validator output into a single message, reporting the first
    /// violated field in `field_order`
    #[must_use]
    pub fn from_validation(errors: &validator::ValidationErrors, field_order: &[&str]) -> Self {
        let field_errors = errors.field_errors();
        let message = field_order
            .iter()
            .filter_map(|field| field_errors.get(*field))
            .chain(field_errors.values())
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(ToString::to_string))
            .unwrap_or_else(|| "Invalid request".to_string());
        ApiError::BadRequest(message)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::UseCase(uc_error) => uc_error.status_code(),
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error envelope: `{success: false, error, message, status, timestamp, details?}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
    pub status: u16,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ErrorDetails>,
}

/// Extra context attached when a ledger message was rewritten
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetails {
    pub original_error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let (message, details) = match &self {
            ApiError::UseCase(UseCaseError::Friendly { message, original }) => (
                message.clone(),
                Some(ErrorDetails {
                    original_error: original.clone(),
                }),
            ),
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "Unhandled internal error");
                ("An unexpected error occurred".to_string(), None)
            }
            other => (other.to_string(), None),
        };

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %message, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %message, "Request rejected");
        }

        let body = ErrorResponse {
            success: false,
            error: message.clone(),
            message,
            status: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(format!("Invalid query string: {}", rejection.body_text()))
    }
}
