//! Checklist Frontend App
//!
//! Top-level component: constructs the session, restores it once on mount and
//! switches between the login view and the dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Dashboard, LoginView};
use crate::session::Session;

#[component]
pub fn App() -> impl IntoView {
    // Construct -> restore -> ready; logout is the explicit teardown
    let session = Session::new();
    provide_context(session);

    Effect::new(move |_| {
        spawn_local(async move {
            session.restore().await;
        });
    });

    view! {
        <div class="app-shell">
            <Show when=move || session.is_loading()>
                <div class="session-loading">"Carregando..."</div>
            </Show>
            <Show when=move || !session.is_loading() && session.is_authenticated()>
                <Dashboard/>
            </Show>
            <Show when=move || !session.is_loading() && !session.is_authenticated()>
                <LoginView/>
            </Show>
        </div>
    }
}
