//! Delete Credential Use Case
//!
//! The subject removes a credential held on its own account.

use std::sync::Arc;

use crate::application::use_cases::submission::submit_as;
use crate::domain::gateways::LedgerGateway;
use crate::domain::models::credential::CredentialType;
use crate::domain::models::transaction::{LedgerTransaction, SubmittedTransaction};
use crate::shared::errors::{ErrorHints, UseCaseError};

/// Data required to delete a credential
#[derive(Debug, Clone)]
pub struct DeleteCredentialCommand {
    pub subject_seed: String,
    pub issuer_address: String,
    pub credential_type: CredentialType,
}

/// Use case for deleting credentials
pub struct DeleteCredentialUseCase {
    ledger: Arc<dyn LedgerGateway>,
}

impl DeleteCredentialUseCase {
    /// Create a new DeleteCredentialUseCase
    #[must_use]
    pub fn new(ledger: Arc<dyn LedgerGateway>) -> Self {
        Self { ledger }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Ledger` if derivation, submission or validation fails.
    pub async fn execute(
        &self,
        command: DeleteCredentialCommand,
    ) -> Result<SubmittedTransaction, UseCaseError> {
        tracing::info!(
            issuer = %command.issuer_address,
            credential_type = %command.credential_type,
            "Deleting credential"
        );

        let DeleteCredentialCommand {
            subject_seed,
            issuer_address,
            credential_type,
        } = command;

        submit_as(self.ledger.as_ref(), &subject_seed, ErrorHints::None, |subject| {
            LedgerTransaction::CredentialDelete {
                issuer: issuer_address,
                subject: subject.address().to_string(),
                credential_type,
            }
        })
        .await
    }
}
