//! Health Use Cases

mod check_health;

pub use check_health::{CheckHealthUseCase, HealthReport, HealthStatus, LedgerHealth};
