//! Connector registry
//!
//! Maps a symbolic name to a preconfigured wallet connector. Built once at
//! startup from [`AppConfig`] and never mutated afterwards.

use std::collections::BTreeMap;

use crate::config::AppConfig;
use crate::error::{Error, Result};

/// Registry key of the Coinbase Wallet (WalletLink) connector.
pub const WALLET_LINK: &str = "walletLink";

/// Supported connector transports
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectorKind {
    WalletLink,
}

impl ConnectorKind {
    pub fn name(&self) -> &'static str {
        match self {
            ConnectorKind::WalletLink => "Coinbase Wallet",
        }
    }
}

/// A configured wallet connector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Connector {
    kind: ConnectorKind,
    url: String,
    app_name: String,
    chain_id: u32,
    api_key: String,
}

impl Connector {
    fn wallet_link(config: &AppConfig) -> Self {
        Self {
            kind: ConnectorKind::WalletLink,
            url: config.endpoint(),
            app_name: config.app_name.clone(),
            chain_id: config.chain_id,
            api_key: config.api_key.clone(),
        }
    }

    pub fn kind(&self) -> ConnectorKind {
        self.kind
    }

    /// RPC endpoint, API key included.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn chain_id(&self) -> u32 {
        self.chain_id
    }

    /// Endpoint safe to write to logs.
    pub fn redacted_endpoint(&self) -> String {
        if self.api_key.is_empty() {
            return self.url.clone();
        }
        self.url.replace(&self.api_key, "***")
    }
}

/// Immutable name -> connector mapping.
#[derive(Clone, Debug)]
pub struct ConnectorRegistry {
    connectors: BTreeMap<String, Connector>,
}

impl ConnectorRegistry {
    /// Validate `config` and build every known connector from it.
    pub fn build(config: &AppConfig) -> Result<Self> {
        config.validate()?;

        let mut connectors = BTreeMap::new();
        let wallet_link = Connector::wallet_link(config);
        log::info!(
            "[REGISTRY] {} registered for '{}' at {} (chain {})",
            wallet_link.kind().name(),
            wallet_link.app_name(),
            wallet_link.redacted_endpoint(),
            wallet_link.chain_id(),
        );
        connectors.insert(WALLET_LINK.to_string(), wallet_link);

        Ok(Self { connectors })
    }

    pub fn get(&self, name: &str) -> Result<&Connector> {
        self.connectors
            .get(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.connectors.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{capture_logs, logged_at};
    use log::Level;

    fn config(key: &str) -> AppConfig {
        AppConfig::from_values(None, Some(key), None, None).unwrap()
    }

    #[test]
    fn test_build_registers_wallet_link_with_key_in_endpoint() {
        let registry = ConnectorRegistry::build(&config("9aa3d95b3bc440fa88ea12eaa4456161")).unwrap();
        let connector = registry.get(WALLET_LINK).unwrap();

        assert_eq!(connector.kind(), ConnectorKind::WalletLink);
        assert!(connector.url().contains("9aa3d95b3bc440fa88ea12eaa4456161"));
        assert_eq!(connector.url(), "https://mainnet.infura.io/v3/9aa3d95b3bc440fa88ea12eaa4456161");
        assert_eq!(connector.app_name(), "coinbase-demo");
        assert_eq!(registry.names().collect::<Vec<_>>(), vec![WALLET_LINK]);
    }

    #[test]
    fn test_build_fails_without_key() {
        let err = ConnectorRegistry::build(&config("")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_unknown_name_is_not_found() {
        let registry = ConnectorRegistry::build(&config("k3y")).unwrap();
        assert_eq!(
            registry.get("metaMask").unwrap_err(),
            Error::NotFound("metaMask".to_string())
        );
        // Lookup is case-sensitive
        assert!(registry.get("walletlink").is_err());
    }

    #[test]
    fn test_redacted_endpoint_hides_key() {
        capture_logs();
        let registry = ConnectorRegistry::build(&config("supersecretkey")).unwrap();
        let redacted = registry.get(WALLET_LINK).unwrap().redacted_endpoint();
        assert!(!redacted.contains("supersecretkey"));
        assert_eq!(redacted, "https://mainnet.infura.io/v3/***");

        let info = logged_at(Level::Info);
        let registered: Vec<_> = info.iter().filter(|m| m.starts_with("[REGISTRY]")).collect();
        assert_eq!(registered.len(), 1);
        assert!(registered[0].contains("***"));
        assert!(!registered[0].contains("supersecretkey"));
    }
}
