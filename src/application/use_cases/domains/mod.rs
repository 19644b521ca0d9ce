//! Permissioned Domain Use Cases

mod create_domain;
mod delete_domain;
mod inspect_domain;

pub use create_domain::{CreateDomainCommand, CreateDomainUseCase, CreatedDomain};
pub use delete_domain::{DeleteDomainCommand, DeleteDomainUseCase};
pub use inspect_domain::InspectDomainUseCase;
