//! Checklist Card Component
//!
//! One checklist in the grid: title, progress bar, items, inline add-item
//! form and the edit/delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DeleteConfirmButton, ItemRow};
use crate::context::use_app_context;
use crate::mapper::ItemDraft;
use crate::models::Checklist;

#[component]
pub fn ChecklistCard(checklist: Checklist) -> impl IntoView {
    let ctx = use_app_context();
    let (new_item_text, set_new_item_text) = signal(String::new());
    let (action_error, set_action_error) = signal::<Option<String>>(None);

    let checklist_id = checklist.id.clone();
    let percentage = checklist.completion_percentage;
    let has_hidden_items = checklist.items.is_empty() && checklist.total_items > 0;

    let on_expand = {
        let id = checklist.id.clone();
        move |_| {
            let id = id.clone();
            spawn_local(async move {
                if let Err(err) = ctx.controller.expand(&id).await {
                    set_action_error.set(Some(err.message().to_string()));
                }
            });
        }
    };

    let on_edit = {
        let checklist = checklist.clone();
        move |_| ctx.open_edit(checklist.clone())
    };

    let on_delete = {
        let id = checklist.id.clone();
        Callback::new(move |_| {
            let id = id.clone();
            spawn_local(async move {
                if let Err(err) = ctx.controller.delete(&id).await {
                    set_action_error.set(Some(err.message().to_string()));
                }
            });
        })
    };

    let on_add_item = {
        let id = checklist_id.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let description = new_item_text.get();
            if description.trim().is_empty() {
                return;
            }
            let id = id.clone();
            spawn_local(async move {
                let draft = ItemDraft {
                    description,
                    ..Default::default()
                };
                match ctx.controller.add_item(&id, draft).await {
                    Ok(()) => set_new_item_text.set(String::new()),
                    Err(err) => set_action_error.set(Some(err.message().to_string())),
                }
            });
        }
    };

    view! {
        <div class="checklist-card">
            <div class="card-header">
                <h2>{checklist.title.clone()}</h2>
                <div class="card-actions">
                    <button class="edit-btn" on:click=on_edit>"Editar"</button>
                    <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete/>
                </div>
            </div>

            {checklist.description.clone().map(|d| view! {
                <p class="card-description">{d}</p>
            })}

            <div class="progress-row">
                <div class="progress-bar">
                    <div
                        class="progress-fill"
                        style=format!("width: {}%", percentage)
                    ></div>
                </div>
                <span class="progress-label">
                    {format!(
                        "{} de {} concluídos ({}%)",
                        checklist.completed_items, checklist.total_items, percentage,
                    )}
                </span>
            </div>

            <Show when=move || has_hidden_items>
                <button class="expand-btn" on:click=on_expand.clone()>
                    "Mostrar itens"
                </button>
            </Show>

            <ul class="item-list">
                {checklist
                    .items
                    .iter()
                    .cloned()
                    .map(|item| view! { <ItemRow item=item/> })
                    .collect_view()}
            </ul>

            <form class="add-item-form" on:submit=on_add_item>
                <input
                    type="text"
                    placeholder="Adicionar item..."
                    prop:value=move || new_item_text.get()
                    on:input=move |ev| set_new_item_text.set(event_target_value(&ev))
                />
                <button type="submit">"+"</button>
            </form>

            {move || action_error.get().map(|msg| view! {
                <p class="card-error">{msg}</p>
            })}
        </div>
    }
}
