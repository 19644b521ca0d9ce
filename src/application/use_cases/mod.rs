//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod credentials;
pub mod domains;
pub mod faucet;
pub mod health;
pub mod payments;
pub mod wallets;

mod submission;

#[cfg(test)]
pub(crate) mod test_support;

pub use credentials::{
    AcceptCredentialUseCase, CheckCredentialsUseCase, CreateCredentialUseCase,
    DeleteCredentialUseCase,
};
pub use domains::{CreateDomainUseCase, DeleteDomainUseCase, InspectDomainUseCase};
pub use faucet::{FundWalletUseCase, FundWalletsUseCase};
pub use health::CheckHealthUseCase;
pub use payments::{SendIouUseCase, SendXrpUseCase};
pub use wallets::CreateWalletUseCase;
