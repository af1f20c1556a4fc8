//! Login View Component
//!
//! Entry screen: the Google sign-in button (when the GIS script and client id
//! are available) and the no-backend demo login.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config;
use crate::google;
use crate::session::use_session;

#[component]
pub fn LoginView() -> impl IntoView {
    let session = use_session();
    let (error, set_error) = signal::<Option<String>>(None);
    let (demo_loading, set_demo_loading) = signal(false);
    let (google_mounted, set_google_mounted) = signal(false);

    let google_slot = NodeRef::<html::Div>::new();

    // Mount the provider button once the slot exists. Without a client id or
    // the GIS script the slot stays empty and only the demo path is offered.
    Effect::new(move |_| {
        if google_mounted.get() {
            return;
        }
        let Some(node) = google_slot.get() else {
            return;
        };
        if config::google_client_id().is_empty() || !google::is_available() {
            crate::log::info("[LOGIN] Google sign-in unavailable, demo login only");
            return;
        }
        set_google_mounted.set(true);
        google::mount_button(&node, move |credential| {
            spawn_local(async move {
                if let Err(err) = session.login_with_google(&credential).await {
                    set_error.set(Some(err.message().to_string()));
                }
            });
        });
    });

    let on_demo = move |_| {
        set_error.set(None);
        set_demo_loading.set(true);
        spawn_local(async move {
            session.login_demo().await;
            set_demo_loading.set(false);
        });
    };

    view! {
        <div class="login-view">
            <h1>"Checklists"</h1>
            <p class="login-subtitle">"Organize suas tarefas em listas simples"</p>

            <div class="google-slot" node_ref=google_slot></div>

            <button class="demo-btn" disabled=move || demo_loading.get() on:click=on_demo>
                {move || if demo_loading.get() { "Entrando..." } else { "Experimentar demo" }}
            </button>

            {move || error.get().map(|msg| view! {
                <p class="login-error">{msg}</p>
            })}
        </div>
    }
}
