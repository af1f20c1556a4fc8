//! Item Row Component
//!
//! One checklist item: completion checkbox, description, priority badge,
//! due date with overdue highlight, inline toggle-failure marker and delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::ChecklistItem;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ItemRow(item: ChecklistItem) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let item_id = item.id.clone();
    let toggle_failed = {
        let id = item_id.clone();
        move || store.toggle_errors().read().iter().any(|e| *e == id)
    };

    let on_toggle = {
        let id = item_id.clone();
        move |_| {
            let id = id.clone();
            spawn_local(async move {
                ctx.controller.toggle_item(&id).await;
            });
        }
    };

    let on_delete = {
        let checklist_id = item.checklist_id.clone();
        let id = item_id.clone();
        Callback::new(move |_| {
            let checklist_id = checklist_id.clone();
            let id = id.clone();
            spawn_local(async move {
                // The row stays until the server confirms the removal
                if let Err(err) = ctx.controller.remove_item(&checklist_id, &id).await {
                    crate::log::error(&format!("[CHECKLISTS] delete item failed: {}", err));
                }
            });
        })
    };

    let row_class = if item.is_completed {
        "item-row completed"
    } else {
        "item-row"
    };
    let badge_class = format!("priority-badge {}", item.priority.as_str());
    // The date part is enough for display
    let due_label = item
        .due_date
        .as_ref()
        .map(|d| d.get(..10).unwrap_or(d).to_string());
    let overdue = item.is_overdue;

    view! {
        <li class=row_class>
            <input
                type="checkbox"
                checked=item.is_completed
                on:change=on_toggle
            />
            <span class="item-description">{item.description.clone()}</span>
            <span class=badge_class>{item.priority.label()}</span>
            {due_label.map(|d| view! {
                <span class=if overdue { "due-date overdue" } else { "due-date" }>
                    {d}
                </span>
            })}
            <Show when=toggle_failed.clone()>
                <span class="toggle-error" title="Não foi possível atualizar o item">
                    "!"
                </span>
            </Show>
            <DeleteConfirmButton button_class="item-delete-btn" on_confirm=on_delete/>
        </li>
    }
}
