//! Credential DTOs

use serde::Deserialize;
use validator::Validate;

use super::{check, take, validate_address, validate_seed};
use crate::application::use_cases::credentials::{
    AcceptCredentialCommand, CreateCredentialCommand, DeleteCredentialCommand,
};
use crate::domain::models::credential::CredentialType;
use crate::shared::errors::ApiError;

/// DTO for issuing a credential
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCredentialDto {
    #[validate(custom(
        function = "validate_seed",
        message = "Invalid issuerSeed format. XRPL seed must start with \"s\" and be at least 25 characters long."
    ))]
    pub issuer_seed: Option<String>,

    #[validate(custom(
        function = "validate_address",
        message = "Invalid subjectAddress format. XRPL address must start with \"r\" and be at least 25 characters long."
    ))]
    pub subject_address: Option<String>,

    pub credential_type: Option<String>,

    /// Ripple-epoch seconds
    pub expiration: Option<u32>,

    pub uri: Option<String>,
}

impl CreateCredentialDto {
    pub fn into_command(self) -> Result<CreateCredentialCommand, ApiError> {
        check(
            &self,
            &[
                self.issuer_seed.as_deref(),
                self.subject_address.as_deref(),
                self.credential_type.as_deref(),
            ],
            "Missing required fields: issuerSeed, subjectAddress, credentialType",
            &["issuer_seed", "subject_address"],
        )?;

        Ok(CreateCredentialCommand {
            issuer_seed: take(self.issuer_seed),
            subject_address: take(self.subject_address),
            credential_type: CredentialType::new(take(self.credential_type)),
            expiration: self.expiration,
            uri: self.uri.filter(|uri| !uri.is_empty()),
        })
    }
}

/// DTO shared by credential accept and delete: the subject acts on an issuer's credential
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubjectCredentialDto {
    #[validate(custom(
        function = "validate_seed",
        message = "Invalid subjectSeed format. XRPL seed must start with \"s\" and be at least 25 characters long."
    ))]
    pub subject_seed: Option<String>,

    #[validate(custom(
        function = "validate_address",
        message = "Invalid issuerAddress format. XRPL address must start with \"r\" and be at least 25 characters long."
    ))]
    pub issuer_address: Option<String>,

    pub credential_type: Option<String>,
}

impl SubjectCredentialDto {
    fn into_parts(self) -> Result<(String, String, CredentialType), ApiError> {
        check(
            &self,
            &[
                self.subject_seed.as_deref(),
                self.issuer_address.as_deref(),
                self.credential_type.as_deref(),
            ],
            "Missing required fields: subjectSeed, issuerAddress, credentialType",
            &["subject_seed", "issuer_address"],
        )?;

        Ok((
            take(self.subject_seed),
            take(self.issuer_address),
            CredentialType::new(take(self.credential_type)),
        ))
    }

    pub fn into_accept_command(self) -> Result<AcceptCredentialCommand, ApiError> {
        let (subject_seed, issuer_address, credential_type) = self.into_parts()?;
        Ok(AcceptCredentialCommand {
            subject_seed,
            issuer_address,
            credential_type,
        })
    }

    pub fn into_delete_command(self) -> Result<DeleteCredentialCommand, ApiError> {
        let (subject_seed, issuer_address, credential_type) = self.into_parts()?;
        Ok(DeleteCredentialCommand {
            subject_seed,
            issuer_address,
            credential_type,
        })
    }
}

/// `userSeed`, from the query string or the body
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckCredentialsDto {
    #[validate(custom(
        function = "validate_seed",
        message = "Invalid userSeed format. XRPL seed must start with \"s\" and be at least 25 characters long."
    ))]
    pub user_seed: Option<String>,
}

impl CheckCredentialsDto {
    /// Query string wins over the body
    #[must_use]
    pub fn merge(query: Self, body: Option<Self>) -> Self {
        let user_seed = query
            .user_seed
            .filter(|seed| !seed.is_empty())
            .or_else(|| body.and_then(|b| b.user_seed));
        Self { user_seed }
    }

    pub fn into_seed(self) -> Result<String, ApiError> {
        check(
            &self,
            &[self.user_seed.as_deref()],
            "Missing required field: userSeed",
            &["user_seed"],
        )?;
        Ok(take(self.user_seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SEED: &str = "sEdTM1uX8pu2do5XvTnutH6HsouMaM2";
    const ADDRESS: &str = "rPT1Sjq2YGrBMTttX4GZHjKu9dyfzbpAYe";

    #[test]
    fn create_keeps_optional_fields() {
        let dto: CreateCredentialDto = serde_json::from_value(json!({
            "issuerSeed": SEED,
            "subjectAddress": ADDRESS,
            "credentialType": "KYC",
            "expiration": 800_000_000,
            "uri": "",
        }))
        .unwrap();

        let command = dto.into_command().unwrap();
        assert_eq!(command.credential_type.label(), "KYC");
        assert_eq!(command.expiration, Some(800_000_000));
        assert_eq!(command.uri, None);
    }

    #[test]
    fn create_requires_credential_type() {
        let dto: CreateCredentialDto = serde_json::from_value(json!({
            "issuerSeed": SEED,
            "subjectAddress": ADDRESS,
        }))
        .unwrap();
        assert_eq!(
            dto.into_command().unwrap_err().to_string(),
            "Missing required fields: issuerSeed, subjectAddress, credentialType"
        );
    }

    #[test]
    fn subject_credential_checks_issuer_address() {
        let dto: SubjectCredentialDto = serde_json::from_value(json!({
            "subjectSeed": SEED,
            "issuerAddress": SEED,
            "credentialType": "KYC",
        }))
        .unwrap();
        assert!(dto
            .into_accept_command()
            .unwrap_err()
            .to_string()
            .starts_with("Invalid issuerAddress format."));
    }

    #[test]
    fn check_prefers_query_over_body() {
        let query = CheckCredentialsDto {
            user_seed: Some(SEED.into()),
        };
        let body = CheckCredentialsDto {
            user_seed: Some("sOtherSeed".into()),
        };
        let merged = CheckCredentialsDto::merge(query, Some(body));
        assert_eq!(merged.into_seed().unwrap(), SEED);
    }

    #[test]
    fn check_falls_back_to_body() {
        let body = CheckCredentialsDto {
            user_seed: Some(SEED.into()),
        };
        let merged = CheckCredentialsDto::merge(CheckCredentialsDto::default(), Some(body));
        assert_eq!(merged.into_seed().unwrap(), SEED);
    }

    #[test]
    fn check_requires_user_seed() {
        let merged = CheckCredentialsDto::merge(CheckCredentialsDto::default(), None);
        assert_eq!(
            merged.into_seed().unwrap_err().to_string(),
            "Missing required field: userSeed"
        );
    }
}
