//! Domain Models
//!
//! Core domain entities and value objects.

pub mod credential;
pub mod faucet;
pub mod ledger;
pub mod transaction;
pub mod wallet;
