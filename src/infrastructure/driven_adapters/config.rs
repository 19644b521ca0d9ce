//! Application Configuration
//!
//! Loads configuration from files and environment variables.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Ledger connection configuration
#[derive(Debug, Clone, Deserialize)]
pub struct XrplConfig {
    /// rippled JSON-RPC endpoint
    pub rpc_url: String,
    /// Test-network faucet endpoint
    pub faucet_url: String,
    pub request_timeout_secs: u64,
    /// Upper bound on waiting for a submitted transaction to validate
    pub validation_timeout_secs: u64,
    pub poll_interval_ms: u64,
    /// Ledgers added to the current index for `LastLedgerSequence`
    pub ledger_offset: u32,
    pub faucet_poll_attempts: u32,
}

impl Default for XrplConfig {
    fn default() -> Self {
        Self {
            rpc_url: "https://s.devnet.rippletest.net:51234/".into(),
            faucet_url: "https://faucet.devnet.rippletest.net/accounts".into(),
            request_timeout_secs: 30,
            validation_timeout_secs: 60,
            poll_interval_ms: 1000,
            ledger_offset: 20,
            faucet_poll_attempts: 20,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub xrpl: XrplConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "default".into());

        let builder = Config::builder()
            // Start with default config
            .add_source(File::with_name("config/default").required(true))
            // Merge environment-specific config if it exists
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            // Override with environment variables (e.g., APP__SERVER__PORT)
            .add_source(Environment::with_prefix("APP").separator("__"));

        Self::finish(builder, std::env::var("PORT").ok())
    }

    /// Parse a TOML document, applying the same `PORT` override as [`AppConfig::load`]
    pub fn from_toml(source: &str, port: Option<String>) -> Result<Self, ConfigError> {
        let builder = Config::builder().add_source(File::from_str(source, FileFormat::Toml));
        Self::finish(builder, port)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        port: Option<String>,
    ) -> Result<Self, ConfigError> {
        let builder = match port {
            Some(port) => builder.set_override("server.port", port)?,
            None => builder,
        };

        builder.build()?.try_deserialize()
    }
}
