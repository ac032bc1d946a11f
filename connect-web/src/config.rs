//! # Application Configuration
//!
//! Configuration is baked in at compile time: `build.rs` loads `.env` and
//! forwards the keys below to `rustc`, and [`AppConfig::from_env()`] reads
//! them back with `option_env!`.
//!
//! | Key                | Required | Default                                   |
//! |--------------------|----------|-------------------------------------------|
//! | `INFURA_KEY`       | yes      |                                           |
//! | `RPC_URL_TEMPLATE` | no       | `https://mainnet.infura.io/v3/{api_key}`  |
//! | `WALLET_APP_NAME`  | no       | `coinbase-demo`                           |
//! | `WALLET_CHAIN_ID`  | no       | `1`                                       |
//! | `WALLET_LOG_LEVEL` | no       | `info`                                    |
//!
//! All configuration is validated on startup to fail fast if misconfigured.

use crate::error::{Error, Result};

/// Placeholder substituted with the API key in the endpoint template.
pub const API_KEY_PLACEHOLDER: &str = "{api_key}";

pub const DEFAULT_ENDPOINT_TEMPLATE: &str = "https://mainnet.infura.io/v3/{api_key}";
pub const DEFAULT_APP_NAME: &str = "coinbase-demo";
pub const DEFAULT_CHAIN_ID: u32 = 1;

/// Wallet connection configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// RPC endpoint with an `{api_key}` placeholder
    pub endpoint_template: String,

    /// Provider API key (Infura project id)
    pub api_key: String,

    /// Name shown to the user inside the wallet's approval prompt
    pub app_name: String,

    /// Chain the connector is configured for. `u32` is what the wallet SDK accepts.
    pub chain_id: u32,
}

impl AppConfig {
    /// Load configuration from compile-time environment values.
    ///
    /// A missing `INFURA_KEY` is not reported here but by [`validate`](Self::validate),
    /// so that both paths produce the same error.
    pub fn from_env() -> Result<Self> {
        Self::from_values(
            option_env!("RPC_URL_TEMPLATE"),
            option_env!("INFURA_KEY"),
            option_env!("WALLET_APP_NAME"),
            option_env!("WALLET_CHAIN_ID"),
        )
    }

    /// Build a configuration from raw optional values, applying defaults.
    pub fn from_values(
        endpoint_template: Option<&str>,
        api_key: Option<&str>,
        app_name: Option<&str>,
        chain_id: Option<&str>,
    ) -> Result<Self> {
        let chain_id = match chain_id.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => raw
                .parse()
                .map_err(|e| Error::Config(format!("WALLET_CHAIN_ID must be a valid number: {}", e)))?,
            None => DEFAULT_CHAIN_ID,
        };

        Ok(Self {
            endpoint_template: endpoint_template
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(DEFAULT_ENDPOINT_TEMPLATE)
                .to_string(),
            api_key: api_key.unwrap_or_default().trim().to_string(),
            app_name: app_name
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(DEFAULT_APP_NAME)
                .to_string(),
            chain_id,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::Config("INFURA_KEY must be set in .env or the build environment".to_string()));
        }

        if !self.endpoint_template.contains(API_KEY_PLACEHOLDER) {
            return Err(Error::Config(format!(
                "RPC_URL_TEMPLATE must contain the {} placeholder",
                API_KEY_PLACEHOLDER
            )));
        }

        if !(self.endpoint_template.starts_with("https://") || self.endpoint_template.starts_with("http://")) {
            return Err(Error::Config("RPC_URL_TEMPLATE must be an http(s) URL".to_string()));
        }

        if self.app_name.trim().is_empty() {
            return Err(Error::Config("WALLET_APP_NAME must not be empty".to_string()));
        }

        if self.chain_id == 0 {
            return Err(Error::Config("WALLET_CHAIN_ID must be greater than zero".to_string()));
        }

        Ok(())
    }

    /// Endpoint URL with the API key substituted in.
    pub fn endpoint(&self) -> String {
        self.endpoint_template.replace(API_KEY_PLACEHOLDER, &self.api_key)
    }
}

/// Log level from `WALLET_LOG_LEVEL`, `Info` when unset or unrecognized.
pub fn log_level() -> log::Level {
    parse_log_level(option_env!("WALLET_LOG_LEVEL"))
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(log::Level::Info)
}
