//! Credential Domain Model
//!
//! Credential labels and the acceptance rules of permissioned domains.

use chrono::{DateTime, Utc};

/// `LedgerEntryType` of credential objects returned by `account_objects`
pub const CREDENTIAL_ENTRY_TYPE: &str = "Credential";

/// Seconds between the Unix epoch and the Ripple epoch (2000-01-01T00:00:00Z)
pub const RIPPLE_EPOCH_OFFSET: i64 = 946_684_800;

/// Lifetime of a credential when the caller does not pick an expiration
pub const DEFAULT_CREDENTIAL_TTL_SECS: i64 = 3600;

/// Upper-case hex of a UTF-8 string, the ledger's encoding for blob fields
#[must_use]
pub fn to_hex(value: &str) -> String {
    hex::encode_upper(value.as_bytes())
}

/// Convert a timestamp to ledger time (seconds since the Ripple epoch)
#[must_use]
pub fn to_ripple_time(at: DateTime<Utc>) -> u32 {
    let secs = at.timestamp() - RIPPLE_EPOCH_OFFSET;
    u32::try_from(secs.max(0)).unwrap_or(u32::MAX)
}

/// Human readable credential label, e.g. `KYC`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialType(String);

impl CredentialType {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.0
    }

    /// Hex form used in `CredentialType` transaction fields
    #[must_use]
    pub fn to_hex(&self) -> String {
        to_hex(&self.0)
    }

    /// URI recorded on the credential when the issuer gives none
    #[must_use]
    pub fn default_uri(&self) -> String {
        format!("https://example.com/credentials/{}", self.0.to_lowercase())
    }
}

impl std::fmt::Display for CredentialType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A credential a permissioned domain accepts: issuer plus credential type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedCredential {
    pub issuer: String,
    pub credential_type: CredentialType,
}

/// Default expiration: one hour from `now`, in ledger time
#[must_use]
pub fn default_expiration(now: DateTime<Utc>) -> u32 {
    to_ripple_time(now + chrono::Duration::seconds(DEFAULT_CREDENTIAL_TTL_SECS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn hex_is_upper_case_utf8() {
        assert_eq!(to_hex("KYC"), "4B5943");
        assert_eq!(CredentialType::new("kyc").to_hex(), "6B7963");
    }

    #[test]
    fn default_uri_lowercases_the_label() {
        assert_eq!(
            CredentialType::new("KYC").default_uri(),
            "https://example.com/credentials/kyc"
        );
    }

    #[test]
    fn ripple_time_starts_in_2000() {
        let epoch = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(to_ripple_time(epoch), 0);
        assert_eq!(to_ripple_time(epoch + chrono::Duration::seconds(42)), 42);
    }

    #[test]
    fn times_before_the_ripple_epoch_clamp_to_zero() {
        let before = Utc.with_ymd_and_hms(1999, 12, 31, 0, 0, 0).unwrap();
        assert_eq!(to_ripple_time(before), 0);
    }

    #[test]
    fn default_expiration_is_one_hour_ahead() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(default_expiration(now), to_ripple_time(now) + 3600);
    }
}
