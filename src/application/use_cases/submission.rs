//! Signed Submission
//!
//! Shared path of every transaction-submitting use case: derive the signer
//! from its seed, build the transaction, submit and wait for validation.

use crate::domain::gateways::LedgerGateway;
use crate::domain::models::transaction::{LedgerTransaction, SubmittedTransaction};
use crate::domain::models::wallet::{mask_seed, Wallet};
use crate::shared::errors::{ErrorHints, UseCaseError};

/// Derive the wallet for `seed`, build a transaction for it and submit it
pub(crate) async fn submit_as<F>(
    ledger: &dyn LedgerGateway,
    seed: &str,
    hints: ErrorHints,
    build: F,
) -> Result<SubmittedTransaction, UseCaseError>
where
    F: FnOnce(&Wallet) -> LedgerTransaction,
{
    let signer = ledger.wallet_from_seed(seed).map_err(|e| {
        tracing::warn!(seed = %mask_seed(seed), error = %e, "Could not derive wallet from seed");
        UseCaseError::from_ledger(e, hints)
    })?;

    let tx = build(&signer);
    tracing::debug!(
        account = %signer.address(),
        transaction_type = tx.transaction_type(),
        "Submitting transaction"
    );

    let submitted = ledger.submit_and_wait(&signer, &tx).await.map_err(|e| {
        tracing::warn!(
            account = %signer.address(),
            transaction_type = tx.transaction_type(),
            error = %e,
            "Transaction submission failed"
        );
        UseCaseError::from_ledger(e, hints)
    })?;

    tracing::info!(
        account = %signer.address(),
        transaction_type = tx.transaction_type(),
        hash = %submitted.hash,
        result = submitted.transaction_result().unwrap_or("unknown"),
        "Transaction validated"
    );

    Ok(submitted)
}
