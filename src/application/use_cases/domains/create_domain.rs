//! Create Domain Use Case
//!
//! Creates a permissioned domain accepting the given credentials and reports
//! the ID of the ledger object that was created.

use std::sync::Arc;

use serde::Serialize;

use crate::application::use_cases::submission::submit_as;
use crate::domain::gateways::LedgerGateway;
use crate::domain::models::credential::AcceptedCredential;
use crate::domain::models::transaction::{LedgerTransaction, SubmittedTransaction};
use crate::shared::errors::{ErrorHints, UseCaseError};

const DOMAIN_ENTRY_TYPE: &str = "PermissionedDomain";

/// Data required to create a permissioned domain
#[derive(Debug, Clone)]
pub struct CreateDomainCommand {
    pub admin_seed: String,
    pub accepted_credentials: Vec<AcceptedCredential>,
}

/// Validated `PermissionedDomainSet` plus the new domain's ID
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedDomain {
    #[serde(flatten)]
    pub transaction: SubmittedTransaction,
    pub domain_id: Option<String>,
}

/// Use case for creating permissioned domains
pub struct CreateDomainUseCase {
    ledger: Arc<dyn LedgerGateway>,
}

impl CreateDomainUseCase {
    /// Create a new CreateDomainUseCase
    #[must_use]
    pub fn new(ledger: Arc<dyn LedgerGateway>) -> Self {
        Self { ledger }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Ledger` if derivation, submission or validation fails.
    pub async fn execute(&self, command: CreateDomainCommand) -> Result<CreatedDomain, UseCaseError> {
        tracing::info!(
            accepted_credentials = command.accepted_credentials.len(),
            "Creating permissioned domain"
        );

        let CreateDomainCommand {
            admin_seed,
            accepted_credentials,
        } = command;

        let transaction = submit_as(self.ledger.as_ref(), &admin_seed, ErrorHints::None, |_| {
            LedgerTransaction::PermissionedDomainSet {
                accepted_credentials,
            }
        })
        .await?;

        let domain_id = transaction.created_entry_id(DOMAIN_ENTRY_TYPE, "DomainID");
        match &domain_id {
            Some(id) => tracing::info!(domain_id = %id, "Permissioned domain created"),
            None => tracing::warn!(hash = %transaction.hash, "No permissioned domain found in transaction metadata"),
        }

        Ok(CreatedDomain {
            transaction,
            domain_id,
        })
    }
}
