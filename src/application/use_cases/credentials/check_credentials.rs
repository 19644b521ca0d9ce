//! Check Credentials Use Case
//!
//! Lists every credential object owned by the account derived from a seed,
//! following `account_objects` pagination to the end.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::gateways::LedgerGateway;
use crate::domain::models::credential::CREDENTIAL_ENTRY_TYPE;
use crate::domain::models::wallet::mask_seed;
use crate::shared::errors::{ErrorHints, UseCaseError};

/// Use case for listing credentials
pub struct CheckCredentialsUseCase {
    ledger: Arc<dyn LedgerGateway>,
}

impl CheckCredentialsUseCase {
    /// Create a new CheckCredentialsUseCase
    #[must_use]
    pub fn new(ledger: Arc<dyn LedgerGateway>) -> Self {
        Self { ledger }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Ledger` if the seed cannot be derived or a page fails to load.
    pub async fn execute(&self, user_seed: &str) -> Result<Vec<Value>, UseCaseError> {
        tracing::info!(seed = %mask_seed(user_seed), "Checking credentials");

        let wallet = self
            .ledger
            .wallet_from_seed(user_seed)
            .map_err(|e| UseCaseError::from_ledger(e, ErrorHints::None))?;

        let mut credentials = Vec::new();
        let mut marker = None;
        let mut pages = 0usize;

        loop {
            let page = self
                .ledger
                .account_objects(wallet.address(), marker)
                .await
                .map_err(|e| UseCaseError::from_ledger(e, ErrorHints::None))?;
            pages += 1;

            credentials.extend(
                page.objects
                    .into_iter()
                    .filter(|object| object["LedgerEntryType"] == CREDENTIAL_ENTRY_TYPE),
            );

            match page.marker {
                Some(next) => marker = Some(next),
                None => break,
            }
        }

        tracing::info!(
            account = %wallet.address(),
            pages,
            credentials = credentials.len(),
            "Credentials retrieved"
        );
        Ok(credentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::StubLedger;
    use crate::domain::models::ledger::AccountObjectsPage;
    use serde_json::json;

    #[tokio::test]
    async fn should_follow_markers_and_keep_only_credentials() {
        let repo = Arc::new(
            StubLedger::new()
                .with_page(AccountObjectsPage {
                    objects: vec![
                        json!({ "LedgerEntryType": "Credential", "index": "A" }),
                        json!({ "LedgerEntryType": "RippleState", "index": "B" }),
                    ],
                    marker: Some(json!("page-2")),
                })
                .with_page(AccountObjectsPage {
                    objects: vec![json!({ "LedgerEntryType": "Credential", "index": "C" })],
                    marker: None,
                }),
        );
        let use_case = CheckCredentialsUseCase::new(repo.clone());

        let credentials = use_case.execute("sEdTM1uX8pu2do5XvTnutH6HsouMaM2").await.unwrap();

        let indexes: Vec<&str> = credentials
            .iter()
            .filter_map(|c| c["index"].as_str())
            .collect();
        assert_eq!(indexes, vec!["A", "C"]);
        assert_eq!(
            *repo.requested_markers.lock().unwrap(),
            vec![None, Some(json!("page-2"))]
        );
    }

    #[tokio::test]
    async fn should_return_empty_list_for_account_without_objects() {
        let use_case = CheckCredentialsUseCase::new(Arc::new(StubLedger::new()));

        let credentials = use_case.execute("sEdTM1uX8pu2do5XvTnutH6HsouMaM2").await.unwrap();

        assert!(credentials.is_empty());
    }
}
