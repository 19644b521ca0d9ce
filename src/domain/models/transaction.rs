//! Ledger Transaction Model
//!
//! Transactions this service submits, and the validated outcome returned by
//! the ledger. Autofill fields (`Sequence`, `Fee`, `LastLedgerSequence`,
//! `SigningPubKey`) are left to the gateway.

use serde::Serialize;
use serde_json::{json, Map, Value};

use super::credential::{AcceptedCredential, CredentialType};

/// Payment amount: XRP in drops or an issued currency
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Amount {
    Drops(String),
    Issued {
        currency: String,
        issuer: String,
        value: String,
    },
}

impl Amount {
    fn to_json(&self) -> Value {
        match self {
            Amount::Drops(drops) => Value::String(drops.clone()),
            Amount::Issued {
                currency,
                issuer,
                value,
            } => json!({
                "currency": currency,
                "issuer": issuer,
                "value": value,
            }),
        }
    }
}

/// Transactions the gateway knows how to build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerTransaction {
    Payment {
        destination: String,
        amount: Amount,
    },
    CredentialCreate {
        subject: String,
        credential_type: CredentialType,
        expiration: u32,
        uri: String,
    },
    CredentialAccept {
        issuer: String,
        credential_type: CredentialType,
    },
    CredentialDelete {
        issuer: String,
        subject: String,
        credential_type: CredentialType,
    },
    PermissionedDomainSet {
        accepted_credentials: Vec<AcceptedCredential>,
    },
    PermissionedDomainDelete {
        domain_id: String,
    },
}

impl LedgerTransaction {
    /// The `TransactionType` field value
    #[must_use]
    pub fn transaction_type(&self) -> &'static str {
        match self {
            Self::Payment { .. } => "Payment",
            Self::CredentialCreate { .. } => "CredentialCreate",
            Self::CredentialAccept { .. } => "CredentialAccept",
            Self::CredentialDelete { .. } => "CredentialDelete",
            Self::PermissionedDomainSet { .. } => "PermissionedDomainSet",
            Self::PermissionedDomainDelete { .. } => "PermissionedDomainDelete",
        }
    }

    /// Render the unsigned transaction JSON for `account`
    #[must_use]
    pub fn to_json(&self, account: &str) -> Value {
        let mut tx = Map::new();
        tx.insert("TransactionType".into(), json!(self.transaction_type()));
        tx.insert("Account".into(), json!(account));

        match self {
            Self::Payment {
                destination,
                amount,
            } => {
                tx.insert("Destination".into(), json!(destination));
                tx.insert("Amount".into(), amount.to_json());
            }
            Self::CredentialCreate {
                subject,
                credential_type,
                expiration,
                uri,
            } => {
                tx.insert("Subject".into(), json!(subject));
                tx.insert("CredentialType".into(), json!(credential_type.to_hex()));
                tx.insert("Expiration".into(), json!(expiration));
                tx.insert("URI".into(), json!(uri));
            }
            Self::CredentialAccept {
                issuer,
                credential_type,
            } => {
                tx.insert("Issuer".into(), json!(issuer));
                tx.insert("CredentialType".into(), json!(credential_type.to_hex()));
            }
            Self::CredentialDelete {
                issuer,
                subject,
                credential_type,
            } => {
                tx.insert("Issuer".into(), json!(issuer));
                tx.insert("Subject".into(), json!(subject));
                tx.insert("CredentialType".into(), json!(credential_type.to_hex()));
            }
            Self::PermissionedDomainSet {
                accepted_credentials,
            } => {
                let accepted: Vec<Value> = accepted_credentials
                    .iter()
                    .map(|cred| {
                        json!({
                            "Credential": {
                                "Issuer": cred.issuer,
                                "CredentialType": cred.credential_type.to_hex(),
                            }
                        })
                    })
                    .collect();
                tx.insert("AcceptedCredentials".into(), Value::Array(accepted));
            }
            Self::PermissionedDomainDelete { domain_id } => {
                tx.insert("DomainID".into(), json!(domain_id));
            }
        }

        Value::Object(tx)
    }
}

/// A transaction the ledger has validated
#[derive(Debug, Clone, Serialize)]
pub struct SubmittedTransaction {
    pub hash: String,
    pub validated: bool,
    /// The ledger's `tx` result, including `meta`
    pub result: Value,
}

impl SubmittedTransaction {
    /// Final `TransactionResult` code, e.g. `tesSUCCESS`
    #[must_use]
    pub fn transaction_result(&self) -> Option<&str> {
        self.result["meta"]["TransactionResult"].as_str()
    }

    /// Ledger index of the first object of `entry_type` this transaction created,
    /// falling back to the `field` recorded in its `NewFields`
    #[must_use]
    pub fn created_entry_id(&self, entry_type: &str, field: &str) -> Option<String> {
        let nodes = self.result["meta"]["AffectedNodes"].as_array()?;
        let created = nodes
            .iter()
            .map(|node| &node["CreatedNode"])
            .find(|node| node["LedgerEntryType"].as_str() == Some(entry_type))?;

        created["LedgerIndex"]
            .as_str()
            .or_else(|| created["NewFields"][field].as_str())
            .map(ToString::to_string)
    }
}
