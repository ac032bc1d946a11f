//! Browser collaborators used by the connection controller

pub mod notify;
pub mod provider;

pub use notify::{AlertNotifier, Notifier};
pub use provider::{BrowserRuntime, ProviderRuntime};
