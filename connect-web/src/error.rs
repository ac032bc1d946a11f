//! # Error Handling
//!
//! Crate-wide error type [`Error`] built with `thiserror`.
//!
//! ## Error Categories
//!
//! - [`Config`](Error::Config) - required configuration missing or malformed.
//!   Fatal at startup: the connect page is never mounted.
//! - [`NotFound`](Error::NotFound) - a connector name is not registered.
//! - [`Activation`](Error::Activation) - the wallet handshake failed (user
//!   rejected the request, no wallet available, network unreachable).
//!   Recoverable: logged and swallowed by the controller.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Missing or invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No connector registered under the requested name.
    #[error("Connector not found: {0}")]
    NotFound(String),

    /// The external `activate` call failed.
    #[error("Activation error: {0}")]
    Activation(String),
}

impl Error {
    /// Build an [`Error::Activation`] from a rejected JavaScript promise.
    ///
    /// Prefers `Error.message`, then a plain string value, then the debug
    /// rendering of the value.
    pub fn from_js(value: &JsValue) -> Self {
        let message = if let Some(err) = value.dyn_ref::<js_sys::Error>() {
            String::from(err.message())
        } else if let Some(text) = value.as_string() {
            text
        } else {
            format!("{:?}", value)
        };
        Error::Activation(message)
    }

    /// Fatal errors stop the app from mounting the connect page.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}
