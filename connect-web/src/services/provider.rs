//! Wallet provider runtime
//!
//! [`ProviderRuntime`] is the seam between the connection controller and the
//! browser. [`BrowserRuntime`] performs the real handshake through the
//! Coinbase Wallet SDK (WalletLink) or an injected EIP-1193 provider.

use async_trait::async_trait;
use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::connectors::{Connector, ConnectorKind};
use crate::error::{Error, Result};
use crate::utils::format::truncate_address;

/// Performs the asynchronous wallet handshake for a connector.
#[async_trait(?Send)]
pub trait ProviderRuntime {
    async fn activate(&self, connector: &Connector) -> Result<()>;
}

// ============================================================================
// COINBASE WALLET / WALLETLINK (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
function walletLinkProvider(appName, url, chainId) {
    const sdk = window.CoinbaseWalletSDK || window.WalletLink;
    if (sdk) {
        const Sdk = sdk.default || sdk.CoinbaseWalletSDK || sdk.WalletLink || sdk;
        const instance = new Sdk({ appName: appName });
        return instance.makeWeb3Provider(url, chainId);
    }
    // Coinbase Wallet extension and other EIP-1193 wallets
    if (window.ethereum && typeof window.ethereum.request === 'function') {
        return window.ethereum;
    }
    return null;
}

export async function activateWalletLink(appName, url, chainId) {
    const provider = walletLinkProvider(appName, url, chainId);
    if (!provider) {
        throw new Error('No Coinbase Wallet SDK or injected wallet found');
    }

    const accounts = await provider.request({ method: 'eth_requestAccounts' });

    let activeChain = null;
    try {
        activeChain = await provider.request({ method: 'eth_chainId' });
    } catch (_) {
        // Some providers only answer once a chain is selected
    }

    return {
        accounts: Array.isArray(accounts) ? accounts : [],
        chainId: activeChain ? String(activeChain) : null,
    };
}
")]
extern "C" {
    /// Request accounts through a WalletLink provider
    #[wasm_bindgen(catch, js_name = activateWalletLink)]
    async fn activate_wallet_link_js(app_name: &str, url: &str, chain_id: u32) -> std::result::Result<JsValue, JsValue>;
}

/// Result of a successful handshake.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Web3Session {
    pub accounts: Vec<String>,
    pub chain_id: Option<String>,
}

impl Web3Session {
    /// First authorized account; a session without accounts is not a connection.
    pub fn primary_account(&self) -> Result<&str> {
        self.accounts
            .first()
            .map(String::as_str)
            .ok_or_else(|| Error::Activation("Wallet returned no accounts".to_string()))
    }
}

/// Browser implementation of [`ProviderRuntime`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRuntime;

impl BrowserRuntime {
    pub fn new() -> Self {
        Self
    }

    async fn activate_wallet_link(&self, connector: &Connector) -> Result<Web3Session> {
        let raw = activate_wallet_link_js(connector.app_name(), connector.url(), connector.chain_id())
            .await
            .map_err(|e| Error::from_js(&e))?;

        serde_wasm_bindgen::from_value(raw)
            .map_err(|e| Error::Activation(format!("Unexpected wallet response: {}", e)))
    }
}

#[async_trait(?Send)]
impl ProviderRuntime for BrowserRuntime {
    async fn activate(&self, connector: &Connector) -> Result<()> {
        let session = match connector.kind() {
            ConnectorKind::WalletLink => self.activate_wallet_link(connector).await?,
        };

        let account = session.primary_account()?;
        log::debug!(
            "[PROVIDER] {} session for {} on chain {}",
            connector.kind().name(),
            truncate_address(account),
            session.chain_id.as_deref().unwrap_or("unknown"),
        );
        Ok(())
    }
}
