//! Friendly Ledger Error Messages
//!
//! Maps raw ledger/SDK messages onto messages a wallet user can act on.

/// Which rewrite table applies to a failed ledger call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorHints {
    /// Report the raw ledger message
    None,
    /// Only seed decoding problems are rewritten
    Seed,
    XrpPayment,
    IouPayment,
}

const SEED_UNKNOWN_LETTER: &str =
    "Invalid wallet seed format. Please provide a valid XRPL seed that starts with \"s\".";
const SEED_CHECKSUM: &str = "Invalid wallet seed checksum. The seed appears to be corrupted or invalid. Please provide a valid XRPL seed.";
const SEED_INVALID: &str = "Invalid wallet seed format. Please provide a valid XRPL seed.";
const INVALID_RECIPIENT: &str = "Invalid recipient address. Please provide a valid XRPL address.";
const TRUST_LINE: &str =
    "Trust line issue. Please ensure trust line is established between sender and issuer.";
const REDUNDANT: &str =
    "Transaction is redundant. The sender and recipient addresses cannot be the same.";
const INVALID_PARAMS: &str = "Invalid transaction parameters. Please check your input values.";

impl ErrorHints {
    /// Return the friendly message for `raw`, if one of the table's patterns matches
    #[must_use]
    pub fn rewrite(self, raw: &str) -> Option<&'static str> {
        if self == Self::None {
            return None;
        }

        if raw.contains("Unknown letter") {
            return Some(SEED_UNKNOWN_LETTER);
        }
        if raw.contains("checksum_invalid") {
            return Some(SEED_CHECKSUM);
        }
        if raw.contains("Invalid seed") {
            return Some(SEED_INVALID);
        }
        if self == Self::Seed {
            return None;
        }

        let tokens = self == Self::IouPayment;
        if raw.contains("insufficient funds") {
            return Some(if tokens {
                "Insufficient funds in the sender wallet. Please ensure the wallet has enough tokens."
            } else {
                "Insufficient funds in the sender wallet. Please ensure the wallet has enough XRP."
            });
        }
        if raw.contains("invalid address") {
            return Some(INVALID_RECIPIENT);
        }
        if tokens && raw.contains("trust line") {
            return Some(TRUST_LINE);
        }
        if raw.contains("temREDUNDANT") {
            return Some(REDUNDANT);
        }
        if raw.contains("temINVALID") {
            return Some(INVALID_PARAMS);
        }
        if raw.contains("tecUNFUNDED_PAYMENT") {
            return Some(if tokens {
                "Insufficient funds. The sender wallet does not have enough tokens for this transaction."
            } else {
                "Insufficient funds. The sender wallet does not have enough XRP for this transaction."
            });
        }

        None
    }
}
