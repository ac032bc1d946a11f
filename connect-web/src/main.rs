//! Coinbase Wallet connect page
//!
//! Builds the connector registry from compile-time configuration, wires the
//! connection controller to the browser wallet runtime and mounts the page.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

pub mod app;
pub mod config;
pub mod connectors;
pub mod controller;
pub mod error;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

use app::App;
use config::AppConfig;
use connectors::{ConnectorRegistry, WALLET_LINK};
use error::Result;
use pages::ConfigErrorPage;
use services::{AlertNotifier, BrowserRuntime};
use state::wallet::AppController;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("[STARTUP] Connect page starting");

    match bootstrap() {
        Ok(controller) => {
            leptos::mount::mount_to_body(move || view! { <App controller=controller/> });
        }
        Err(e) => {
            if e.is_fatal() {
                log::error!("[CONFIG] {}", e);
            } else {
                log::error!("[STARTUP] {}", e);
            }
            let message = e.to_string();
            leptos::mount::mount_to_body(move || view! { <ConfigErrorPage message=message/> });
        }
    }

    hide_loading_screen();
}

/// Load configuration, build the registry and the controller.
fn bootstrap() -> Result<AppController> {
    let config = AppConfig::from_env()?;
    let registry = ConnectorRegistry::build(&config)?;
    log::debug!("[REGISTRY] connectors: {:?}", registry.names().collect::<Vec<_>>());
    AppController::new(BrowserRuntime::new(), AlertNotifier, &registry, WALLET_LINK)
}

/// Hide the loading screen element
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("[STARTUP] No document available");
        return;
    };

    match document.get_element_by_id("leptos-loading") {
        Some(loading_element) => {
            if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
                if let Err(e) = html_element.class_list().add_1("hidden") {
                    log::warn!("[STARTUP] Could not add 'hidden' class: {:?}", e);
                }
            }
            // Also set display:none as backup
            if let Err(e) = loading_element.set_attribute("style", "display: none !important;") {
                log::warn!("[STARTUP] Could not set loading screen style: {:?}", e);
            }
        }
        None => log::warn!("[STARTUP] Loading element not found"),
    }
}
