//! Connect Web App - Leptos Frontend
//!
//! Single page: a status heading and a "Connect Wallet" button.

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::pages::HomePage;
use crate::state::wallet::{provide_wallet_context, AppController};

#[component]
pub fn App(controller: AppController) -> impl IntoView {
    provide_wallet_context(controller);

    view! {
        <Router>
            <div class="app-container">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="my-div">
            <h3>"404 - Page Not Found"</h3>
            <A href="/">
                <span class="my-button">"Go to Home"</span>
            </A>
        </div>
    }
}
