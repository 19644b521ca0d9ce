//! Key derivation, signing and binary encoding, delegated to `xrpl-rust`

use serde_json::{json, Value};
use xrpl::core::binarycodec::{encode, encode_for_signing};
use xrpl::core::keypairs::{derive_classic_address, derive_keypair, generate_seed, sign};

use crate::domain::models::wallet::Wallet;
use crate::shared::errors::LedgerError;

/// Generate a random seed and derive its wallet
pub fn generate_wallet() -> Result<Wallet, LedgerError> {
    let seed = generate_seed(None, None).map_err(|e| LedgerError::Wallet(e.to_string()))?;
    wallet_from_seed(&seed)
}

/// Derive keypair and classic address from a seed
pub fn wallet_from_seed(seed: &str) -> Result<Wallet, LedgerError> {
    let seed = seed.trim();
    let (public_key, private_key) =
        derive_keypair(seed, false).map_err(|e| LedgerError::InvalidSeed(e.to_string()))?;
    let address =
        derive_classic_address(&public_key).map_err(|e| LedgerError::Wallet(e.to_string()))?;

    Ok(Wallet::new(address, public_key, private_key, seed.to_string()))
}

/// A signed transaction ready for `submit`
#[derive(Debug)]
pub struct SignedBlob {
    pub tx_blob: String,
    pub tx_json: Value,
}

/// Sign an autofilled transaction with `wallet`
pub fn sign_transaction(wallet: &Wallet, mut tx: Value) -> Result<SignedBlob, LedgerError> {
    tx["SigningPubKey"] = json!(wallet.public_key());

    let signing_blob = encode_for_signing(&tx).map_err(|e| LedgerError::Codec(e.to_string()))?;
    let message = hex::decode(&signing_blob).map_err(|e| LedgerError::Codec(e.to_string()))?;
    let signature =
        sign(&message, wallet.private_key()).map_err(|e| LedgerError::Wallet(e.to_string()))?;

    tx["TxnSignature"] = json!(signature);
    let tx_blob = encode(&tx).map_err(|e| LedgerError::Codec(e.to_string()))?;

    Ok(SignedBlob { tx_blob, tx_json: tx })
}
