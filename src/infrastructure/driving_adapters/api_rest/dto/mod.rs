//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod credential;
pub mod domain;
pub mod envelope;
pub mod faucet;
pub mod payment;
pub mod wallet;

use validator::{Validate, ValidationError};

use crate::domain::models::wallet::{looks_like_address, looks_like_seed};
use crate::shared::errors::ApiError;

pub use envelope::ApiResponse;

/// Validates the shape of an XRPL seed
fn validate_seed(seed: &str) -> Result<(), ValidationError> {
    if looks_like_seed(seed) {
        Ok(())
    } else {
        Err(ValidationError::new("seed_format"))
    }
}

/// Validates the shape of a classic XRPL address
fn validate_address(address: &str) -> Result<(), ValidationError> {
    if looks_like_address(address) {
        Ok(())
    } else {
        Err(ValidationError::new("address_format"))
    }
}

/// True when a required text field is absent or empty
fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

/// Fail with `message` when any required field is blank, then run the
/// field validators reporting the first failure in `field_order`
fn check<T: Validate>(
    dto: &T,
    required: &[Option<&str>],
    message: &str,
    field_order: &[&str],
) -> Result<(), ApiError> {
    if required.iter().any(|field| is_blank(*field)) {
        return Err(ApiError::BadRequest(message.to_string()));
    }
    dto.validate()
        .map_err(|errors| ApiError::from_validation(&errors, field_order))
}

/// Take a field that [`check`] has already proven present
fn take(value: Option<String>) -> String {
    value.unwrap_or_default()
}
