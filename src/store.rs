//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The checklist
//! sequence is owned by the dashboard's controller for the lifetime of the
//! dashboard view and reloaded fresh on every mount.
//!
//! The `store_*` helpers wrap pure reconcile functions so the list mutations
//! stay testable without a reactive runtime.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{completion_percentage, Checklist, ChecklistItem};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Checklists of the current session, most-recent-first
    pub checklists: Vec<Checklist>,
    /// True while the initial listing is in flight
    pub loading: bool,
    /// Persistent, retryable load failure shown as a banner
    pub load_error: Option<String>,
    /// Ids of items whose last toggle failed (inline marker, non-blocking)
    pub toggle_errors: Vec<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Prepend a newly created checklist (most-recent-first ordering)
pub fn store_prepend_checklist(store: &AppStore, checklist: Checklist) {
    store.checklists().write().insert(0, checklist);
}

/// Replace the checklist with the same id, leaving other entries untouched
pub fn store_replace_checklist(store: &AppStore, updated: Checklist) {
    replace_checklist(&mut store.checklists().write(), updated);
}

/// Remove a checklist from the store by id
pub fn store_remove_checklist(store: &AppStore, id: &str) {
    store.checklists().write().retain(|c| c.id != id);
}

/// Replace a single item inside its owning checklist with the authoritative
/// server state, recomputing that checklist's derived counters
pub fn store_replace_item(store: &AppStore, item: ChecklistItem) {
    replace_item(&mut store.checklists().write(), item);
}

/// Append a newly created item to its owning checklist
pub fn store_append_item(store: &AppStore, item: ChecklistItem) {
    append_item(&mut store.checklists().write(), item);
}

/// Remove an item from its owning checklist
pub fn store_remove_item(store: &AppStore, checklist_id: &str, item_id: &str) {
    remove_item(&mut store.checklists().write(), checklist_id, item_id);
}

/// Mark or clear the inline toggle-failure marker for an item
pub fn store_set_toggle_error(store: &AppStore, item_id: &str, failed: bool) {
    let binding = store.toggle_errors();
    let mut errors = binding.write();
    errors.retain(|id| id != item_id);
    if failed {
        errors.push(item_id.to_string());
    }
}

// ========================
// Pure reconcile functions
// ========================

pub fn replace_checklist(list: &mut Vec<Checklist>, updated: Checklist) {
    if let Some(entry) = list.iter_mut().find(|c| c.id == updated.id) {
        *entry = updated;
    }
}

pub fn replace_item(list: &mut Vec<Checklist>, item: ChecklistItem) {
    if let Some(checklist) = list.iter_mut().find(|c| c.id == item.checklist_id) {
        if let Some(entry) = checklist.items.iter_mut().find(|i| i.id == item.id) {
            *entry = item;
            recompute_counters(checklist);
        }
    }
}

pub fn append_item(list: &mut Vec<Checklist>, item: ChecklistItem) {
    if let Some(checklist) = list.iter_mut().find(|c| c.id == item.checklist_id) {
        checklist.items.push(item);
        recompute_counters(checklist);
    }
}

pub fn remove_item(list: &mut Vec<Checklist>, checklist_id: &str, item_id: &str) {
    if let Some(checklist) = list.iter_mut().find(|c| c.id == checklist_id) {
        checklist.items.retain(|i| i.id != item_id);
        recompute_counters(checklist);
    }
}

/// Find the id of the checklist owning `item_id`, if it is in local state
pub fn find_owner(list: &[Checklist], item_id: &str) -> Option<String> {
    list.iter()
        .find(|c| c.items.iter().any(|i| i.id == item_id))
        .map(|c| c.id.clone())
}

/// Derived counters follow every local item mutation
pub fn recompute_counters(checklist: &mut Checklist) {
    checklist.total_items = checklist.items.len() as u32;
    checklist.completed_items = checklist.items.iter().filter(|i| i.is_completed).count() as u32;
    checklist.completion_percentage =
        completion_percentage(checklist.completed_items, checklist.total_items);
}
