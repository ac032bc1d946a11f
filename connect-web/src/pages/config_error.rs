//! Configuration Error Page - mounted instead of the app when startup fails

use leptos::prelude::*;

#[component]
pub fn ConfigErrorPage(message: String) -> impl IntoView {
    view! {
        <div class="my-div">
            <h3>"Wallet connection is not configured"</h3>
            <p class="config-error">{message}</p>
            <p class="config-hint">"Set INFURA_KEY in .env and rebuild."</p>
        </div>
    }
}
