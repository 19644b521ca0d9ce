//! Permissioned Domain DTOs

use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use super::{check, is_blank, take, validate_seed};
use crate::application::use_cases::domains::{CreateDomainCommand, DeleteDomainCommand};
use crate::domain::models::credential::{AcceptedCredential, CredentialType};
use crate::domain::models::wallet::looks_like_address;
use crate::shared::errors::ApiError;

/// One `{issuer, credentialType}` pair a domain accepts
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptedCredentialDto {
    pub issuer: Option<String>,
    pub credential_type: Option<String>,
}

/// DTO for creating a permissioned domain
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDomainDto {
    #[validate(custom(
        function = "validate_seed",
        message = "Invalid adminSeed format. XRPL seed must start with \"s\" and be at least 25 characters long."
    ))]
    pub admin_seed: Option<String>,

    /// Kept loose so that a non-array gets the missing-fields message
    #[serde(default)]
    pub accepted_credentials: Option<Value>,
}

impl CreateDomainDto {
    pub fn into_command(self) -> Result<CreateDomainCommand, ApiError> {
        let entries = match (&self.admin_seed, &self.accepted_credentials) {
            (seed, Some(Value::Array(entries))) if !is_blank(seed.as_deref()) => entries.clone(),
            _ => {
                return Err(ApiError::BadRequest(
                    "Missing required fields: adminSeed, acceptedCredentials (array)".into(),
                ))
            }
        };
        check(&self, &[], "", &["admin_seed"])?;

        if entries.is_empty() {
            return Err(ApiError::BadRequest(
                "acceptedCredentials array cannot be empty".into(),
            ));
        }

        let accepted_credentials = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| accepted_credential(index, entry))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CreateDomainCommand {
            admin_seed: take(self.admin_seed),
            accepted_credentials,
        })
    }
}

fn accepted_credential(index: usize, entry: Value) -> Result<AcceptedCredential, ApiError> {
    let entry: AcceptedCredentialDto = serde_json::from_value(entry).unwrap_or_default();
    match (entry.issuer, entry.credential_type) {
        (Some(issuer), Some(credential_type))
            if looks_like_address(&issuer) && !credential_type.is_empty() =>
        {
            Ok(AcceptedCredential {
                issuer,
                credential_type: CredentialType::new(credential_type),
            })
        }
        _ => Err(ApiError::BadRequest(format!(
            "acceptedCredentials[{index}] must have an XRPL issuer address and a credentialType"
        ))),
    }
}

/// DTO for deleting a permissioned domain
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeleteDomainDto {
    #[validate(custom(
        function = "validate_seed",
        message = "Invalid adminSeed format. XRPL seed must start with \"s\" and be at least 25 characters long."
    ))]
    pub admin_seed: Option<String>,

    pub domain_id: Option<String>,
}

impl DeleteDomainDto {
    pub fn into_command(self) -> Result<DeleteDomainCommand, ApiError> {
        check(
            &self,
            &[self.admin_seed.as_deref(), self.domain_id.as_deref()],
            "Missing required fields: adminSeed, domainId",
            &["admin_seed"],
        )?;

        Ok(DeleteDomainCommand {
            admin_seed: take(self.admin_seed),
            domain_id: take(self.domain_id),
        })
    }
}

/// `domainId`, from the query string or the body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectDomainDto {
    pub domain_id: Option<String>,
}

impl InspectDomainDto {
    /// Query string wins over the body
    #[must_use]
    pub fn merge(query: Self, body: Option<Self>) -> Self {
        let domain_id = query
            .domain_id
            .filter(|id| !id.is_empty())
            .or_else(|| body.and_then(|b| b.domain_id));
        Self { domain_id }
    }

    pub fn into_domain_id(self) -> Result<String, ApiError> {
        match self.domain_id {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(ApiError::BadRequest(
                "Missing required field: domainId".into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SEED: &str = "sEdTM1uX8pu2do5XvTnutH6HsouMaM2";
    const ISSUER: &str = "rPT1Sjq2YGrBMTttX4GZHjKu9dyfzbpAYe";

    fn create(body: serde_json::Value) -> Result<CreateDomainCommand, ApiError> {
        serde_json::from_value::<CreateDomainDto>(body)
            .unwrap()
            .into_command()
    }

    #[test]
    fn create_requires_credentials_array() {
        let err = create(json!({ "adminSeed": SEED })).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required fields: adminSeed, acceptedCredentials (array)"
        );
    }

    #[test]
    fn create_requires_credentials_to_be_an_array() {
        for credentials in [json!("KYC"), json!({ "issuer": ISSUER }), json!(null)] {
            let err = create(json!({ "adminSeed": SEED, "acceptedCredentials": credentials }))
                .unwrap_err();
            assert_eq!(
                err.to_string(),
                "Missing required fields: adminSeed, acceptedCredentials (array)"
            );
        }
    }

    #[test]
    fn create_rejects_non_object_entries() {
        let err = create(json!({ "adminSeed": SEED, "acceptedCredentials": ["KYC"] })).unwrap_err();
        assert_eq!(
            err.to_string(),
            "acceptedCredentials[0] must have an XRPL issuer address and a credentialType"
        );
    }

    #[test]
    fn create_rejects_empty_credentials() {
        let err = create(json!({ "adminSeed": SEED, "acceptedCredentials": [] })).unwrap_err();
        assert_eq!(err.to_string(), "acceptedCredentials array cannot be empty");
    }

    #[test]
    fn create_rejects_incomplete_entries() {
        let err = create(json!({
            "adminSeed": SEED,
            "acceptedCredentials": [
                { "issuer": ISSUER, "credentialType": "KYC" },
                { "issuer": ISSUER }
            ]
        }))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "acceptedCredentials[1] must have an XRPL issuer address and a credentialType"
        );
    }

    #[test]
    fn create_checks_admin_seed_shape() {
        let err = create(json!({
            "adminSeed": ISSUER,
            "acceptedCredentials": [{ "issuer": ISSUER, "credentialType": "KYC" }]
        }))
        .unwrap_err();
        assert!(err.to_string().starts_with("Invalid adminSeed format."));
    }

    #[test]
    fn create_builds_command() {
        let command = create(json!({
            "adminSeed": SEED,
            "acceptedCredentials": [{ "issuer": ISSUER, "credentialType": "KYC" }]
        }))
        .unwrap();
        assert_eq!(command.accepted_credentials.len(), 1);
        assert_eq!(command.accepted_credentials[0].credential_type.label(), "KYC");
    }

    #[test]
    fn delete_requires_domain_id() {
        let dto: DeleteDomainDto = serde_json::from_value(json!({ "adminSeed": SEED })).unwrap();
        assert_eq!(
            dto.into_command().unwrap_err().to_string(),
            "Missing required fields: adminSeed, domainId"
        );
    }

    #[test]
    fn inspect_merges_query_and_body() {
        let body = InspectDomainDto {
            domain_id: Some("ABC".into()),
        };
        let merged = InspectDomainDto::merge(InspectDomainDto::default(), Some(body));
        assert_eq!(merged.into_domain_id().unwrap(), "ABC");

        let merged = InspectDomainDto::merge(InspectDomainDto::default(), None);
        assert_eq!(
            merged.into_domain_id().unwrap_err().to_string(),
            "Missing required field: domainId"
        );
    }
}
