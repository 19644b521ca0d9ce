//! Payment DTOs
//!
//! `amount` may arrive as a JSON string or number; numbers are passed on in
//! their decimal text form.

use serde::Deserialize;
use serde_json::Number;
use validator::Validate;

use super::{check, take, validate_address, validate_seed};
use crate::application::use_cases::payments::{SendIouCommand, SendXrpCommand};
use crate::shared::errors::ApiError;

const FIELD_ORDER: &[&str] = &["from_seed", "to_address", "issuer"];

/// Amount as sent by clients
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AmountValue {
    Text(String),
    Number(Number),
}

impl AmountValue {
    fn into_text(self) -> String {
        match self {
            AmountValue::Text(text) => text,
            AmountValue::Number(number) => number.to_string(),
        }
    }
}

/// Empty strings and zero count as a missing amount
fn amount_text(amount: Option<&AmountValue>) -> Option<String> {
    match amount? {
        AmountValue::Text(text) if text.is_empty() => None,
        AmountValue::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.clone().into_text()),
    }
}

/// DTO for an XRP payment
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendXrpDto {
    #[validate(custom(
        function = "validate_seed",
        message = "Invalid fromSeed format. XRPL seed must start with \"s\" and be at least 25 characters long."
    ))]
    pub from_seed: Option<String>,

    #[validate(custom(
        function = "validate_address",
        message = "Invalid toAddress format. XRPL address must start with \"r\" and be at least 25 characters long."
    ))]
    pub to_address: Option<String>,

    pub amount: Option<AmountValue>,
}

impl SendXrpDto {
    pub fn into_command(self) -> Result<SendXrpCommand, ApiError> {
        let amount = amount_text(self.amount.as_ref());
        check(
            &self,
            &[
                self.from_seed.as_deref(),
                self.to_address.as_deref(),
                amount.as_deref(),
            ],
            "Missing required fields: fromSeed, toAddress, amount",
            FIELD_ORDER,
        )?;

        Ok(SendXrpCommand {
            from_seed: take(self.from_seed),
            to_address: take(self.to_address),
            amount: take(amount),
        })
    }
}

/// DTO for an issued-currency payment
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendIouDto {
    #[validate(custom(
        function = "validate_seed",
        message = "Invalid fromSeed format. XRPL seed must start with \"s\" and be at least 25 characters long."
    ))]
    pub from_seed: Option<String>,

    #[validate(custom(
        function = "validate_address",
        message = "Invalid toAddress format. XRPL address must start with \"r\" and be at least 25 characters long."
    ))]
    pub to_address: Option<String>,

    pub amount: Option<AmountValue>,

    pub currency: Option<String>,

    #[validate(custom(
        function = "validate_address",
        message = "Invalid issuer format. XRPL issuer address must start with \"r\" and be at least 25 characters long."
    ))]
    pub issuer: Option<String>,
}

impl SendIouDto {
    pub fn into_command(self) -> Result<SendIouCommand, ApiError> {
        let amount = amount_text(self.amount.as_ref());
        check(
            &self,
            &[
                self.from_seed.as_deref(),
                self.to_address.as_deref(),
                amount.as_deref(),
                self.currency.as_deref(),
                self.issuer.as_deref(),
            ],
            "Missing required fields: fromSeed, toAddress, amount, currency, issuer",
            FIELD_ORDER,
        )?;

        Ok(SendIouCommand {
            from_seed: take(self.from_seed),
            to_address: take(self.to_address),
            amount: take(amount),
            currency: take(self.currency),
            issuer: take(self.issuer),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SEED: &str = "sEdTM1uX8pu2do5XvTnutH6HsouMaM2";
    const ADDRESS: &str = "rPT1Sjq2YGrBMTttX4GZHjKu9dyfzbpAYe";

    fn xrp(body: serde_json::Value) -> Result<SendXrpCommand, ApiError> {
        serde_json::from_value::<SendXrpDto>(body).unwrap().into_command()
    }

    #[test]
    fn xrp_accepts_numeric_amount() {
        let command = xrp(json!({ "fromSeed": SEED, "toAddress": ADDRESS, "amount": 1_000_000 })).unwrap();
        assert_eq!(command.amount, "1000000");
        assert_eq!(command.to_address, ADDRESS);
    }

    #[test]
    fn xrp_reports_missing_fields() {
        for body in [
            json!({ "toAddress": ADDRESS, "amount": "10" }),
            json!({ "fromSeed": SEED, "toAddress": "", "amount": "10" }),
            json!({ "fromSeed": SEED, "toAddress": ADDRESS }),
            json!({ "fromSeed": SEED, "toAddress": ADDRESS, "amount": 0 }),
        ] {
            let err = xrp(body).unwrap_err();
            assert_eq!(err.to_string(), "Missing required fields: fromSeed, toAddress, amount");
        }
    }

    #[test]
    fn xrp_checks_seed_before_address() {
        let err = xrp(json!({ "fromSeed": "rBadSeed", "toAddress": "sBad", "amount": "1" })).unwrap_err();
        assert!(err.to_string().starts_with("Invalid fromSeed format."));

        let err = xrp(json!({ "fromSeed": SEED, "toAddress": "sBad", "amount": "1" })).unwrap_err();
        assert!(err.to_string().starts_with("Invalid toAddress format."));
    }

    #[test]
    fn iou_checks_issuer_shape() {
        let dto: SendIouDto = serde_json::from_value(json!({
            "fromSeed": SEED,
            "toAddress": ADDRESS,
            "amount": "12.5",
            "currency": "USD",
            "issuer": "xNotAnAddress0000000000000000",
        }))
        .unwrap();
        let err = dto.into_command().unwrap_err();
        assert!(err.to_string().starts_with("Invalid issuer format."));
    }

    #[test]
    fn iou_builds_command() {
        let dto: SendIouDto = serde_json::from_value(json!({
            "fromSeed": SEED,
            "toAddress": ADDRESS,
            "amount": "12.5",
            "currency": "USD",
            "issuer": ADDRESS,
        }))
        .unwrap();
        let command = dto.into_command().unwrap();
        assert_eq!(command.amount, "12.5");
        assert_eq!(command.currency, "USD");
    }
}
