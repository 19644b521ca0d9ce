//! Send IOU Use Case
//!
//! Sends an issued-currency payment. The sender needs a trust line to the issuer.

use std::sync::Arc;

use crate::application::use_cases::submission::submit_as;
use crate::domain::gateways::LedgerGateway;
use crate::domain::models::transaction::{Amount, LedgerTransaction, SubmittedTransaction};
use crate::domain::models::wallet::mask_seed;
use crate::shared::errors::{ErrorHints, UseCaseError};

/// Data required to send an issued currency
#[derive(Debug, Clone)]
pub struct SendIouCommand {
    pub from_seed: String,
    pub to_address: String,
    pub amount: String,
    pub currency: String,
    pub issuer: String,
}

/// Use case for IOU payments
pub struct SendIouUseCase {
    ledger: Arc<dyn LedgerGateway>,
}

impl SendIouUseCase {
    /// Create a new SendIouUseCase
    #[must_use]
    pub fn new(ledger: Arc<dyn LedgerGateway>) -> Self {
        Self { ledger }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Friendly` when the ledger failure matches a known
    /// payment or trust line problem, `UseCaseError::Ledger` otherwise.
    pub async fn execute(&self, command: SendIouCommand) -> Result<SubmittedTransaction, UseCaseError> {
        tracing::info!(
            from = %mask_seed(&command.from_seed),
            to = %command.to_address,
            amount = %command.amount,
            currency = %command.currency,
            issuer = %command.issuer,
            "Sending IOU payment"
        );

        let SendIouCommand {
            from_seed,
            to_address,
            amount,
            currency,
            issuer,
        } = command;

        submit_as(self.ledger.as_ref(), &from_seed, ErrorHints::IouPayment, |_| {
            LedgerTransaction::Payment {
                destination: to_address,
                amount: Amount::Issued {
                    currency,
                    issuer,
                    value: amount,
                },
            }
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::StubLedger;
    use crate::shared::errors::LedgerError;

    const ISSUER: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";

    fn command() -> SendIouCommand {
        SendIouCommand {
            from_seed: "snoPBrXtMeMyMHUVTgbuqAfg1SUTb".into(),
            to_address: "rPT1Sjq2YGrBMTttX4GZHjKu9dyfzbpAYe".into(),
            amount: "25".into(),
            currency: "USD".into(),
            issuer: ISSUER.into(),
        }
    }

    #[tokio::test]
    async fn should_submit_issued_amount() {
        let repo = Arc::new(StubLedger::new());
        let use_case = SendIouUseCase::new(repo.clone());

        use_case.execute(command()).await.unwrap();

        let (_, tx) = repo.last_submitted().unwrap();
        match tx {
            LedgerTransaction::Payment {
                amount: Amount::Issued {
                    currency,
                    issuer,
                    value,
                },
                ..
            } => {
                assert_eq!(currency, "USD");
                assert_eq!(issuer, ISSUER);
                assert_eq!(value, "25");
            }
            other => panic!("unexpected transaction {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_mention_tokens_for_unfunded_payments() {
        let repo = Arc::new(StubLedger::new().with_submit(Err(LedgerError::Rejected {
            result: "tecUNFUNDED_PAYMENT".into(),
            message: "Insufficient balance.".into(),
        })));
        let use_case = SendIouUseCase::new(repo);

        let err = use_case.execute(command()).await.unwrap_err();

        assert!(err.to_string().contains("enough tokens"));
    }
}
