//! Wallet Domain Model
//!
//! A keypair and classic address derived from a seed by the ledger SDK.

use zeroize::Zeroizing;

/// Shortest seed or classic address accepted at the API boundary
pub const MIN_ENCODED_LEN: usize = 25;

/// Number of seed characters that may appear in logs and responses
const SEED_PREVIEW_LEN: usize = 10;

/// Crude seed shape check: `s` prefix and a plausible length
#[must_use]
pub fn looks_like_seed(value: &str) -> bool {
    value.starts_with('s') && value.len() >= MIN_ENCODED_LEN
}

/// Crude classic address shape check: `r` prefix and a plausible length
#[must_use]
pub fn looks_like_address(value: &str) -> bool {
    value.starts_with('r') && value.len() >= MIN_ENCODED_LEN
}

/// Shorten a seed to its first characters followed by `...`
#[must_use]
pub fn mask_seed(seed: &str) -> String {
    let preview: String = seed.chars().take(SEED_PREVIEW_LEN).collect();
    format!("{preview}...")
}

/// Wallet entity; secret material is wiped from memory on drop
#[derive(Clone)]
pub struct Wallet {
    address: String,
    public_key: String,
    private_key: Zeroizing<String>,
    seed: Zeroizing<String>,
}

impl Wallet {
    #[must_use]
    pub fn new(address: String, public_key: String, private_key: String, seed: String) -> Self {
        Self {
            address,
            public_key,
            private_key: Zeroizing::new(private_key),
            seed: Zeroizing::new(seed),
        }
    }

    /// Classic `r...` address
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Hex encoded public key, as used for `SigningPubKey`
    #[must_use]
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    #[must_use]
    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    #[must_use]
    pub fn seed(&self) -> &str {
        &self.seed
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address)
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .field("seed", &mask_seed(&self.seed))
            .finish()
    }
}
