//! Accept Credential Use Case
//!
//! The subject accepts a credential an issuer created for it.

use std::sync::Arc;

use crate::application::use_cases::submission::submit_as;
use crate::domain::gateways::LedgerGateway;
use crate::domain::models::credential::CredentialType;
use crate::domain::models::transaction::{LedgerTransaction, SubmittedTransaction};
use crate::shared::errors::{ErrorHints, UseCaseError};

/// Data required to accept a credential
#[derive(Debug, Clone)]
pub struct AcceptCredentialCommand {
    pub subject_seed: String,
    pub issuer_address: String,
    pub credential_type: CredentialType,
}

/// Use case for accepting credentials
pub struct AcceptCredentialUseCase {
    ledger: Arc<dyn LedgerGateway>,
}

impl AcceptCredentialUseCase {
    /// Create a new AcceptCredentialUseCase
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
        command: AcceptCredentialCommand,
    ) -> Result<SubmittedTransaction, UseCaseError> {
        tracing::info!(
            issuer = %command.issuer_address,
            credential_type = %command.credential_type,
            "Accepting credential"
        );

        let AcceptCredentialCommand {
            subject_seed,
            issuer_address,
            credential_type,
        } = command;

        submit_as(self.ledger.as_ref(), &subject_seed, ErrorHints::None, |_| {
            LedgerTransaction::CredentialAccept {
                issuer: issuer_address,
                credential_type,
            }
        })
        .await
    }
}
