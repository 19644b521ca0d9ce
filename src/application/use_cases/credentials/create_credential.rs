//! Create Credential Use Case
//!
//! Issues a credential to a subject account.

use std::sync::Arc;

use chrono::Utc;

use crate::application::use_cases::submission::submit_as;
use crate::domain::gateways::LedgerGateway;
use crate::domain::models::credential::{default_expiration, to_hex, CredentialType};
use crate::domain::models::transaction::{LedgerTransaction, SubmittedTransaction};
use crate::shared::errors::{ErrorHints, UseCaseError};

/// Data required to issue a credential
#[derive(Debug, Clone)]
pub struct CreateCredentialCommand {
    pub issuer_seed: String,
    pub subject_address: String,
    pub credential_type: CredentialType,
    /// Ledger time; defaults to one hour from now
    pub expiration: Option<u32>,
    /// Plain URI; defaults to a per-type example URI
    pub uri: Option<String>,
}

/// Use case for issuing credentials
pub struct CreateCredentialUseCase {
    ledger: Arc<dyn LedgerGateway>,
}

impl CreateCredentialUseCase {
    /// Create a new CreateCredentialUseCase
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
        command: CreateCredentialCommand,
    ) -> Result<SubmittedTransaction, UseCaseError> {
        tracing::info!(
            subject = %command.subject_address,
            credential_type = %command.credential_type,
            "Creating credential"
        );

        let expiration = command
            .expiration
            .unwrap_or_else(|| default_expiration(Utc::now()));
        let uri = command
            .uri
            .as_deref()
            .map_or_else(|| to_hex(&command.credential_type.default_uri()), to_hex);

        let CreateCredentialCommand {
            issuer_seed,
            subject_address,
            credential_type,
            ..
        } = command;

        submit_as(self.ledger.as_ref(), &issuer_seed, ErrorHints::None, |_| {
            LedgerTransaction::CredentialCreate {
                subject: subject_address,
                credential_type,
                expiration,
                uri,
            }
        })
        .await
    }
}
