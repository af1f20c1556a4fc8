//! Dashboard Component
//!
//! Main authenticated view: header with the signed-in user, the checklist
//! grid, the create/edit form and the load-error banner. The checklist
//! sequence lives only as long as this view; every mount reloads it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{ChecklistCard, ChecklistForm};
use crate::context::AppContext;
use crate::controller::ChecklistController;
use crate::session::use_session;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn Dashboard() -> impl IntoView {
    let session = use_session();

    // Fresh state per mount; the data source is picked once from the stored
    // token shape and never re-inspected
    let store = Store::new(AppState::new());
    provide_context(store);
    let controller =
        ChecklistController::for_token(&session.token().unwrap_or_default(), store);
    let ctx = AppContext::new(controller);
    provide_context(ctx);

    // Initial load
    Effect::new(move |_| {
        spawn_local(async move {
            controller.load().await;
        });
    });

    let retry = move |_| {
        spawn_local(async move {
            controller.load().await;
        });
    };

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>"Minhas Checklists"</h1>
                <div class="header-right">
                    {move || session.user().get().map(|u| view! {
                        <span class="user-name">{u.display_name().to_string()}</span>
                    })}
                    <button class="logout-btn" on:click=move |_| session.logout()>
                        "Sair"
                    </button>
                </div>
            </header>

            <Show when=move || store.load_error().get().is_some()>
                <div class="error-banner">
                    <span>{move || store.load_error().get().unwrap_or_default()}</span>
                    <button on:click=retry>"Tentar novamente"</button>
                </div>
            </Show>

            <Show when=move || store.loading().get()>
                <p class="loading">"Carregando checklists..."</p>
            </Show>

            <Show when=move || {
                !store.loading().get()
                    && store.load_error().get().is_none()
                    && store.checklists().read().is_empty()
            }>
                <p class="empty-state">"Nenhuma checklist ainda. Crie a primeira!"</p>
            </Show>

            <div class="checklist-grid">
                {move || {
                    store
                        .checklists()
                        .get()
                        .into_iter()
                        .map(|checklist| view! { <ChecklistCard checklist=checklist/> })
                        .collect_view()
                }}
            </div>

            <button class="new-checklist-btn" on:click=move |_| ctx.open_create()>
                "+ Nova checklist"
            </button>

            <ChecklistForm/>
        </div>
    }
}
