//! Inspect Domain Use Case
//!
//! Reads a permissioned domain's ledger entry.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::gateways::LedgerGateway;
use crate::shared::errors::{ErrorHints, UseCaseError};

/// Use case for reading a permissioned domain
pub struct InspectDomainUseCase {
    ledger: Arc<dyn LedgerGateway>,
}

impl InspectDomainUseCase {
    /// Create a new InspectDomainUseCase
    #[must_use]
    pub fn new(ledger: Arc<dyn LedgerGateway>) -> Self {
        Self { ledger }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Ledger` if the entry does not exist or the lookup fails.
    pub async fn execute(&self, domain_id: &str) -> Result<Value, UseCaseError> {
        tracing::info!(domain_id = %domain_id, "Inspecting permissioned domain");

        self.ledger
            .ledger_entry(domain_id)
            .await
            .map_err(|e| UseCaseError::from_ledger(e, ErrorHints::None))
    }
}
