//! Credential Use Cases
//!
//! Issue, accept, list and delete ledger credentials.

mod accept_credential;
mod check_credentials;
mod create_credential;
mod delete_credential;

pub use accept_credential::{AcceptCredentialCommand, AcceptCredentialUseCase};
pub use check_credentials::CheckCredentialsUseCase;
pub use create_credential::{CreateCredentialCommand, CreateCredentialUseCase};
pub use delete_credential::{DeleteCredentialCommand, DeleteCredentialUseCase};
