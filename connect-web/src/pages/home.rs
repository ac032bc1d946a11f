//! Home Page - connect prompt or success message

use leptos::prelude::*;

use crate::controller::ConnectionState;
use crate::state::wallet::use_wallet_context;

pub const PROMPT_TEXT: &str = "Please connect wallet before continuing";
pub const SUCCESS_TEXT: &str = "Wallet has been successfully connected.";
pub const BUTTON_TEXT: &str = "Connect Wallet";

/// What the page shows for a given state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HomeView {
    pub heading: &'static str,
    pub show_button: bool,
    pub button_disabled: bool,
}

pub fn view_model(state: ConnectionState) -> HomeView {
    match state {
        ConnectionState::Connected => HomeView {
            heading: SUCCESS_TEXT,
            show_button: false,
            button_disabled: false,
        },
        ConnectionState::Disconnected => HomeView {
            heading: PROMPT_TEXT,
            show_button: true,
            button_disabled: false,
        },
        ConnectionState::Connecting => HomeView {
            heading: PROMPT_TEXT,
            show_button: true,
            button_disabled: true,
        },
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let model = move || view_model(wallet_ctx.state.get());

    view! {
        <div class="my-div">
            <h3>{move || model().heading}</h3>
            <Show when=move || model().show_button>
                <button
                    class="my-button"
                    disabled=move || model().button_disabled
                    on:click=move |_| wallet_ctx.connect()
                >
                    {BUTTON_TEXT}
                </button>
            </Show>
        </div>
    }
}
