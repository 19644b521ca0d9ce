//! Check Health Use Case
//!
//! Probes the ledger with `server_info` and reports service health.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::domain::gateways::LedgerGateway;

/// Overall service status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Ledger connectivity part of the report
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerHealth {
    pub connected: bool,
    pub endpoint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_info: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Health report returned by the health endpoint
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub timestamp: DateTime<Utc>,
    pub version: &'static str,
    pub xrpl: LedgerHealth,
}

impl HealthReport {
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy
    }
}

/// Use case for health checks
pub struct CheckHealthUseCase {
    ledger: Arc<dyn LedgerGateway>,
}

impl CheckHealthUseCase {
    /// Create a new CheckHealthUseCase
    #[must_use]
    pub fn new(ledger: Arc<dyn LedgerGateway>) -> Self {
        Self { ledger }
    }

    /// Execute the use case. Ledger failures are reported in the result, never as errors.
    pub async fn execute(&self) -> HealthReport {
        let endpoint = self.ledger.endpoint();

        let (status, xrpl) = match self.ledger.server_info().await {
            Ok(info) => (
                HealthStatus::Healthy,
                LedgerHealth {
                    connected: true,
                    endpoint,
                    server_info: Some(info),
                    error: None,
                },
            ),
            Err(e) => {
                tracing::warn!(endpoint = %endpoint, error = %e, "Ledger health probe failed");
                (
                    HealthStatus::Unhealthy,
                    LedgerHealth {
                        connected: false,
                        endpoint,
                        server_info: None,
                        error: Some(e.to_string()),
                    },
                )
            }
        };

        HealthReport {
            status,
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION"),
            xrpl,
        }
    }
}
