//! Delete Domain Use Case

use std::sync::Arc;

use crate::application::use_cases::submission::submit_as;
use crate::domain::gateways::LedgerGateway;
use crate::domain::models::transaction::{LedgerTransaction, SubmittedTransaction};
use crate::shared::errors::{ErrorHints, UseCaseError};

/// Data required to delete a permissioned domain
#[derive(Debug, Clone)]
pub struct DeleteDomainCommand {
    pub admin_seed: String,
    pub domain_id: String,
}

/// Use case for deleting permissioned domains
pub struct DeleteDomainUseCase {
    ledger: Arc<dyn LedgerGateway>,
}

impl DeleteDomainUseCase {
    /// Create a new DeleteDomainUseCase
    #[must_use]
    pub fn new(ledger: Arc<dyn LedgerGateway>) -> Self {
        Self { ledger }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Ledger` if derivation, submission or validation fails.
    pub async fn execute(&self, command: DeleteDomainCommand) -> Result<SubmittedTransaction, UseCaseError> {
        tracing::info!(domain_id = %command.domain_id, "Deleting permissioned domain");

        let DeleteDomainCommand {
            admin_seed,
            domain_id,
        } = command;

        submit_as(self.ledger.as_ref(), &admin_seed, ErrorHints::None, |_| {
            LedgerTransaction::PermissionedDomainDelete { domain_id }
        })
        .await
    }
}
