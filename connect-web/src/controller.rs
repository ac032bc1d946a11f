//! Connection controller
//!
//! Owns the connection state and turns a button press into at most one
//! in-flight `activate` call.
//!
//! ```text
//! Disconnected --connect_wallet()--> Connecting --Ok--> Connected
//!       ^                                |
//!       +-------------Err----------------+
//! ```
//!
//! `Connected` is terminal for the session. State lives in a `Cell`: the app
//! runs on the single-threaded wasm event loop, so a second click can only
//! interleave at the `activate` await point.

use std::cell::Cell;

use crate::connectors::{Connector, ConnectorRegistry};
use crate::error::Result;
use crate::services::{Notifier, ProviderRuntime};

pub const ALREADY_CONNECTED_NOTICE: &str = "Wallet is already connected!";

/// Wallet connection state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected)
    }
}

/// What a single `connect_wallet` call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// `activate` succeeded during this call
    Connected,
    /// Already connected; the user was notified instead
    AlreadyConnected,
    /// Another call is awaiting `activate`
    InProgress,
    /// `activate` failed; the error was logged
    Failed,
}

type StateListener = Box<dyn Fn(ConnectionState)>;

pub struct ConnectionController<R, N> {
    runtime: R,
    notifier: N,
    connector: Connector,
    state: Cell<ConnectionState>,
    listener: Option<StateListener>,
}

impl<R: ProviderRuntime, N: Notifier> ConnectionController<R, N> {
    /// Create a controller bound to the connector registered as `name`.
    pub fn new(runtime: R, notifier: N, registry: &ConnectorRegistry, name: &str) -> Result<Self> {
        let connector = registry.get(name)?.clone();
        Ok(Self {
            runtime,
            notifier,
            connector,
            state: Cell::new(ConnectionState::Disconnected),
            listener: None,
        })
    }

    /// Call `listener` on every state transition.
    pub fn with_listener(mut self, listener: impl Fn(ConnectionState) + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    fn set_state(&self, state: ConnectionState) {
        self.state.set(state);
        if let Some(listener) = &self.listener {
            listener(state);
        }
    }

    pub async fn connect_wallet(&self) -> ConnectOutcome {
        match self.state.get() {
            ConnectionState::Connected => {
                log::info!("[CONNECT] Connect requested while already connected");
                self.notifier.notify(ALREADY_CONNECTED_NOTICE);
                return ConnectOutcome::AlreadyConnected;
            }
            ConnectionState::Connecting => {
                log::info!("[CONNECT] Activation already in progress, ignoring request");
                return ConnectOutcome::InProgress;
            }
            ConnectionState::Disconnected => {}
        }

        self.set_state(ConnectionState::Connecting);
        log::info!(
            "[CONNECT] Activating {} connector",
            self.connector.kind().name()
        );

        match self.runtime.activate(&self.connector).await {
            Ok(()) => {
                self.set_state(ConnectionState::Connected);
                log::info!("[CONNECT] Wallet connected");
                ConnectOutcome::Connected
            }
            Err(e) => {
                self.set_state(ConnectionState::Disconnected);
                log::error!("[CONNECT] {}", e);
                ConnectOutcome::Failed
            }
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state.get()
    }

    pub fn is_connected(&self) -> bool {
        self.state.get().is_connected()
    }

    pub fn connector(&self) -> &Connector {
        &self.connector
    }
}
