//! Wallet state management

use std::rc::Rc;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::controller::{ConnectionController, ConnectionState};
use crate::services::{AlertNotifier, BrowserRuntime};

pub type AppController = ConnectionController<BrowserRuntime, AlertNotifier>;

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub state: RwSignal<ConnectionState>,
    controller: StoredValue<Rc<AppController>, LocalStorage>,
}

impl WalletContext {
    pub fn new(controller: AppController) -> Self {
        let connector = controller.connector();
        log::info!(
            "[CONNECT] {} ready for '{}' on chain {}",
            connector.kind().name(),
            connector.app_name(),
            connector.chain_id(),
        );

        let state = RwSignal::new(controller.state());
        let controller = controller.with_listener(move |next| state.set(next));
        Self {
            state,
            controller: StoredValue::new_local(Rc::new(controller)),
        }
    }

    /// Run `connect_wallet()` on the local executor. The signal follows
    /// the controller through its state listener.
    pub fn connect(&self) {
        let controller = self.controller.get_value();

        leptos::task::spawn_local(async move {
            let outcome = controller.connect_wallet().await;
            log::debug!("[CONNECT] outcome: {:?}", outcome);
        });
    }
}

pub fn provide_wallet_context(controller: AppController) -> WalletContext {
    let context = WalletContext::new(controller);
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
