//! Send XRP Use Case
//!
//! Sends a native XRP payment.

use std::sync::Arc;

use crate::application::use_cases::submission::submit_as;
use crate::domain::gateways::LedgerGateway;
use crate::domain::models::transaction::{Amount, LedgerTransaction, SubmittedTransaction};
use crate::domain::models::wallet::mask_seed;
use crate::shared::errors::{ErrorHints, UseCaseError};

/// Data required to send XRP
#[derive(Debug, Clone)]
pub struct SendXrpCommand {
    pub from_seed: String,
    pub to_address: String,
    /// Amount in drops
    pub amount: String,
}

/// Use case for XRP payments
pub struct SendXrpUseCase {
    ledger: Arc<dyn LedgerGateway>,
}

impl SendXrpUseCase {
    /// Create a new SendXrpUseCase
    #[must_use]
    pub fn new(ledger: Arc<dyn LedgerGateway>) -> Self {
        Self { ledger }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Friendly` when the ledger failure matches a known
    /// payment problem, `UseCaseError::Ledger` otherwise.
    pub async fn execute(&self, command: SendXrpCommand) -> Result<SubmittedTransaction, UseCaseError> {
        tracing::info!(
            from = %mask_seed(&command.from_seed),
            to = %command.to_address,
            amount = %command.amount,
            "Sending XRP payment"
        );

        let SendXrpCommand {
            from_seed,
            to_address,
            amount,
        } = command;

        submit_as(self.ledger.as_ref(), &from_seed, ErrorHints::XrpPayment, |_| {
            LedgerTransaction::Payment {
                destination: to_address,
                amount: Amount::Drops(amount),
            }
        })
        .await
    }
}
