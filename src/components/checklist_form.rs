//! Checklist Form Component
//!
//! Create and edit forms, shown as an overlay while `form_target` is set.
//! Create captures title/description plus dynamic item rows; edit touches
//! title/description only, matching the update contract. Validation failures
//! never reach the network and render inline.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_app_context, FormTarget};
use crate::mapper::{ChecklistChanges, ChecklistDraft, ItemDraft};
use crate::models::{Checklist, Priority};

/// One editable item row in the create form
#[derive(Clone, Debug, Default, PartialEq)]
struct ItemRowState {
    description: String,
    priority: String,
    due_date: String,
}

#[component]
pub fn ChecklistForm() -> impl IntoView {
    let ctx = use_app_context();
    let target = ctx.form_target();

    // Rebuilt whenever the target changes, so each open starts fresh
    view! {
        {move || target.get().map(|t| match t {
            FormTarget::Create => view! { <CreateForm/> }.into_any(),
            FormTarget::Edit(checklist) => {
                view! { <EditForm checklist=checklist/> }.into_any()
            }
        })}
    }
}

#[component]
fn CreateForm() -> impl IntoView {
    let ctx = use_app_context();
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let rows = RwSignal::new(vec![ItemRowState::default()]);
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let draft = ChecklistDraft {
            title: title.get(),
            description: non_blank(description.get()),
            items: rows
                .get()
                .into_iter()
                .map(|row| ItemDraft {
                    description: row.description,
                    priority: non_blank(row.priority).map(|p| Priority::from_str(&p)),
                    due_date: non_blank(row.due_date).map(end_of_day),
                    order: None,
                })
                .collect(),
        };

        set_error.set(None);
        set_submitting.set(true);
        spawn_local(async move {
            match ctx.controller.create(draft).await {
                Ok(()) => ctx.close_form(),
                Err(err) => set_error.set(Some(err.message().to_string())),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="form-overlay">
            <form class="checklist-form" on:submit=on_submit>
                <h2>"Nova checklist"</h2>

                <input
                    type="text"
                    placeholder="Título"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Descrição (opcional)"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>

                <h3>"Itens"</h3>
                {move || {
                    rows.get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, row)| view! {
                            <div class="form-item-row">
                                <input
                                    type="text"
                                    placeholder="Descrição do item"
                                    prop:value=row.description.clone()
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        rows.update(|rows| {
                                            if let Some(row) = rows.get_mut(index) {
                                                row.description = value;
                                            }
                                        });
                                    }
                                />
                                <select
                                    prop:value=if row.priority.is_empty() {
                                        "medium".to_string()
                                    } else {
                                        row.priority.clone()
                                    }
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        rows.update(|rows| {
                                            if let Some(row) = rows.get_mut(index) {
                                                row.priority = value;
                                            }
                                        });
                                    }
                                >
                                    <option value="low">"Baixa"</option>
                                    <option value="medium">"Média"</option>
                                    <option value="high">"Alta"</option>
                                </select>
                                <input
                                    type="date"
                                    prop:value=row.due_date.clone()
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        rows.update(|rows| {
                                            if let Some(row) = rows.get_mut(index) {
                                                row.due_date = value;
                                            }
                                        });
                                    }
                                />
                                <button
                                    type="button"
                                    class="remove-row-btn"
                                    on:click=move |_| {
                                        rows.update(|rows| {
                                            if rows.len() > 1 {
                                                rows.remove(index);
                                            }
                                        });
                                    }
                                >
                                    "×"
                                </button>
                            </div>
                        })
                        .collect_view()
                }}

                <button
                    type="button"
                    class="add-row-btn"
                    on:click=move |_| rows.update(|rows| rows.push(ItemRowState::default()))
                >
                    "+ Adicionar item"
                </button>

                {move || error.get().map(|msg| view! {
                    <p class="form-error">{msg}</p>
                })}

                <div class="form-actions">
                    <button type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Criando..." } else { "Criar" }}
                    </button>
                    <button type="button" on:click=move |_| ctx.close_form()>
                        "Cancelar"
                    </button>
                </div>
            </form>
        </div>
    }
}

#[component]
fn EditForm(checklist: Checklist) -> impl IntoView {
    let ctx = use_app_context();
    let (title, set_title) = signal(checklist.title.clone());
    let (description, set_description) =
        signal(checklist.description.clone().unwrap_or_default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let checklist_id = checklist.id.clone();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let changes = ChecklistChanges {
            title: Some(title.get()),
            description: non_blank(description.get()),
        };
        let id = checklist_id.clone();
        set_error.set(None);
        set_submitting.set(true);
        spawn_local(async move {
            match ctx.controller.edit(&id, changes).await {
                Ok(()) => ctx.close_form(),
                Err(err) => set_error.set(Some(err.message().to_string())),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="form-overlay">
            <form class="checklist-form" on:submit=on_submit>
                <h2>"Editar checklist"</h2>

                <input
                    type="text"
                    placeholder="Título"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Descrição (opcional)"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>

                {move || error.get().map(|msg| view! {
                    <p class="form-error">{msg}</p>
                })}

                <div class="form-actions">
                    <button type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Salvando..." } else { "Salvar" }}
                    </button>
                    <button type="button" on:click=move |_| ctx.close_form()>
                        "Cancelar"
                    </button>
                </div>
            </form>
        </div>
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// `<input type="date">` yields a bare date; the backend expects a datetime,
/// so a due date means "until the end of that day"
fn end_of_day(date: String) -> String {
    format!("{}T23:59:59Z", date)
}
