//! Checklist View-State Controller
//!
//! Owns the in-memory checklist sequence for the current session and keeps it
//! consistent with the selected data source. The source is picked once from
//! the session token; the controller never inspects the token itself.
//!
//! Failure semantics: create/edit/delete bubble to the caller with local state
//! untouched; load failures set the retryable banner; toggle failures are
//! logged and marked inline on the affected item, never surfaced as an alert.

use std::rc::Rc;

use crate::datasource::{self, DataSource};
use crate::error::{AppError, AppResult};
use crate::mapper::{ChecklistChanges, ChecklistDraft, ItemDraft};
use crate::store::{
    find_owner, store_append_item, store_prepend_checklist, store_remove_checklist,
    store_remove_item, store_replace_checklist, store_replace_item, store_set_toggle_error,
    AppStore, AppStateStoreFields,
};

use leptos::prelude::*;

/// Listing page size, matching the backend default
const PAGE_SIZE: u32 = 20;

/// Cheap-to-copy handle; the data source itself is thread-local state behind
/// a `StoredValue`
#[derive(Clone, Copy)]
pub struct ChecklistController {
    source: StoredValue<Rc<dyn DataSource>, LocalStorage>,
    state: AppStore,
}

impl ChecklistController {
    pub fn new(source: Rc<dyn DataSource>, state: AppStore) -> Self {
        Self {
            source: StoredValue::new_local(source),
            state,
        }
    }

    /// Build a controller for the session's token (demo sentinel selects the
    /// in-memory source)
    pub fn for_token(token: &str, state: AppStore) -> Self {
        Self::new(datasource::from_token(token), state)
    }

    fn source(&self) -> Rc<dyn DataSource> {
        self.source.get_value()
    }

    /// Fetch page one of the listing. A failure parks a message in
    /// `load_error`; re-invoking retries.
    pub async fn load(&self) {
        self.state.loading().set(true);
        self.state.load_error().set(None);
        match self.source().list(0, PAGE_SIZE).await {
            Ok(page) => {
                crate::log::info(&format!(
                    "[CHECKLISTS] loaded {} of {} (skip {}, limit {})",
                    page.items.len(),
                    page.total,
                    page.skip,
                    page.limit,
                ));
                self.state.checklists().set(page.items);
            }
            Err(err) => {
                crate::log::error(&format!("[CHECKLISTS] load failed: {}", err));
                self.state.load_error().set(Some(err.message().to_string()));
            }
        }
        self.state.loading().set(false);
    }

    /// Validate, submit, then prepend the created checklist. Blank item rows
    /// are dropped before submission; a draft with no usable item is rejected
    /// without touching the network.
    pub async fn create(&self, draft: ChecklistDraft) -> AppResult<()> {
        let draft = validate_draft(draft)?;
        let created = self.source().create(draft).await?;
        store_prepend_checklist(&self.state, created);
        Ok(())
    }

    /// Update title/description and replace the matching entry by identity
    pub async fn edit(&self, id: &str, changes: ChecklistChanges) -> AppResult<()> {
        validate_changes(&changes)?;
        let updated = self.source().update(id, changes).await?;
        store_replace_checklist(&self.state, updated);
        Ok(())
    }

    /// Remote delete first; the entry leaves local state only after success,
    /// so a failed call never desyncs the visible list
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.source().delete(id).await?;
        store_remove_checklist(&self.state, id);
        Ok(())
    }

    /// Swap a listing summary for the full checklist with items
    pub async fn expand(&self, id: &str) -> AppResult<()> {
        let full = self.source().get(id).await?;
        store_replace_checklist(&self.state, full);
        Ok(())
    }

    pub async fn add_item(&self, checklist_id: &str, draft: ItemDraft) -> AppResult<()> {
        if draft.description.trim().is_empty() {
            return Err(AppError::Validation(
                "Item description cannot be empty".to_string(),
            ));
        }
        let created = self.source().create_item(checklist_id, draft).await?;
        store_append_item(&self.state, created);
        Ok(())
    }

    pub async fn remove_item(&self, checklist_id: &str, item_id: &str) -> AppResult<()> {
        self.source().delete_item(checklist_id, item_id).await?;
        store_remove_item(&self.state, checklist_id, item_id);
        Ok(())
    }

    /// Flip an item's completion. The owning checklist is located in local
    /// state; an unknown item is a silent no-op. On success only that item is
    /// replaced with the server's authoritative state; on failure the item
    /// gets an inline error marker instead of an alert.
    pub async fn toggle_item(&self, item_id: &str) {
        let owner = self
            .state
            .checklists()
            .with_untracked(|list| find_owner(list, item_id));
        let Some(checklist_id) = owner else {
            return;
        };

        match self.source().toggle_item(&checklist_id, item_id).await {
            Ok(item) => {
                store_set_toggle_error(&self.state, item_id, false);
                store_replace_item(&self.state, item);
            }
            Err(err) => {
                crate::log::error(&format!("[CHECKLISTS] toggle {} failed: {}", item_id, err));
                store_set_toggle_error(&self.state, item_id, true);
            }
        }
    }
}

/// Drop blank item rows, then reject a blank title or an itemless draft
fn validate_draft(mut draft: ChecklistDraft) -> AppResult<ChecklistDraft> {
    if draft.title.trim().is_empty() {
        return Err(AppError::Validation("Title cannot be empty".to_string()));
    }
    draft.items.retain(|i| !i.description.trim().is_empty());
    if draft.items.is_empty() {
        return Err(AppError::Validation(
            "Add at least one item".to_string(),
        ));
    }
    Ok(draft)
}

fn validate_changes(changes: &ChecklistChanges) -> AppResult<()> {
    if let Some(title) = &changes.title {
        if title.trim().is_empty() {
            return Err(AppError::Validation("Title cannot be empty".to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::InMemoryDemoDataSource;
    use crate::models::{Checklist, ChecklistItem, ChecklistPage, Priority};
    use crate::store::AppState;
    use async_trait::async_trait;
    use reactive_stores::Store;
    use std::cell::Cell;

    /// Data source that fails every call and counts how often it was reached
    struct FailingSource {
        calls: Cell<u32>,
    }

    impl FailingSource {
        fn new() -> Rc<Self> {
            Rc::new(Self { calls: Cell::new(0) })
        }

        fn fail<T>(&self) -> AppResult<T> {
            self.calls.set(self.calls.get() + 1);
            Err(AppError::Transport {
                message: "backend unreachable".to_string(),
            })
        }
    }

    #[async_trait(?Send)]
    impl DataSource for FailingSource {
        async fn list(&self, _skip: u32, _limit: u32) -> AppResult<ChecklistPage> {
            self.fail()
        }
        async fn get(&self, _id: &str) -> AppResult<Checklist> {
            self.fail()
        }
        async fn create(&self, _draft: ChecklistDraft) -> AppResult<Checklist> {
            self.fail()
        }
        async fn update(&self, _id: &str, _changes: ChecklistChanges) -> AppResult<Checklist> {
            self.fail()
        }
        async fn delete(&self, _id: &str) -> AppResult<()> {
            self.fail()
        }
        async fn create_item(
            &self,
            _checklist_id: &str,
            _draft: ItemDraft,
        ) -> AppResult<ChecklistItem> {
            self.fail()
        }
        async fn update_item(
            &self,
            _checklist_id: &str,
            _item_id: &str,
            _changes: crate::mapper::ItemChanges,
        ) -> AppResult<ChecklistItem> {
            self.fail()
        }
        async fn delete_item(&self, _checklist_id: &str, _item_id: &str) -> AppResult<()> {
            self.fail()
        }
        async fn toggle_item(
            &self,
            _checklist_id: &str,
            _item_id: &str,
        ) -> AppResult<ChecklistItem> {
            self.fail()
        }
    }

    fn demo_controller() -> ChecklistController {
        ChecklistController::new(
            Rc::new(InMemoryDemoDataSource::seeded()),
            Store::new(AppState::default()),
        )
    }

    fn draft(title: &str, items: &[&str]) -> ChecklistDraft {
        ChecklistDraft {
            title: title.to_string(),
            description: None,
            items: items
                .iter()
                .map(|d| ItemDraft {
                    description: d.to_string(),
                    ..Default::default()
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_load_demo_returns_canned_checklists() {
        let controller = demo_controller();
        controller.load().await;

        let state = controller.state;
        assert!(!state.loading().get_untracked());
        assert_eq!(state.load_error().get_untracked(), None);
        let checklists = state.checklists().get_untracked();
        assert_eq!(checklists.len(), 2);
        assert_eq!(checklists[0].title, "Preparação para Reunião");
        assert_eq!(checklists[0].completion_percentage, 67);
        assert_eq!(checklists[1].title, "Setup Novo Projeto");
        assert_eq!(checklists[1].completion_percentage, 50);
    }

    #[tokio::test]
    async fn test_load_failure_sets_retryable_banner() {
        let source = FailingSource::new();
        let controller =
            ChecklistController::new(source.clone(), Store::new(AppState::default()));
        controller.load().await;

        assert_eq!(
            controller.state.load_error().get_untracked().as_deref(),
            Some("backend unreachable")
        );
        assert!(!controller.state.loading().get_untracked());
    }

    #[tokio::test]
    async fn test_blank_title_rejected_before_any_network_call() {
        let source = FailingSource::new();
        let controller =
            ChecklistController::new(source.clone(), Store::new(AppState::default()));

        let err = controller.create(draft("   ", &["Café"])).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(source.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_draft_without_usable_items_rejected() {
        let source = FailingSource::new();
        let controller =
            ChecklistController::new(source.clone(), Store::new(AppState::default()));

        let err = controller
            .create(draft("Compras", &["   ", ""]))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(source.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_create_prepends_most_recent_first() {
        let controller = demo_controller();
        controller.load().await;
        controller
            .create(draft("Compras", &["Café", "Leite"]))
            .await
            .unwrap();

        let checklists = controller.state.checklists().get_untracked();
        assert_eq!(checklists.len(), 3);
        assert_eq!(checklists[0].title, "Compras");
        assert!(checklists[0].items.iter().all(|i| !i.is_completed));
    }

    #[tokio::test]
    async fn test_create_failure_leaves_local_state_untouched() {
        let source = FailingSource::new();
        let controller =
            ChecklistController::new(source.clone(), Store::new(AppState::default()));

        let err = controller.create(draft("Compras", &["Café"])).await.unwrap_err();
        assert!(matches!(err, AppError::Transport { .. }));
        assert_eq!(source.calls.get(), 1);
        assert!(controller.state.checklists().get_untracked().is_empty());
    }

    #[tokio::test]
    async fn test_edit_replaces_only_the_matching_entry() {
        let controller = demo_controller();
        controller.load().await;
        controller
            .edit(
                "2",
                ChecklistChanges {
                    title: Some("Setup Projeto X".to_string()),
                    description: None,
                },
            )
            .await
            .unwrap();

        let checklists = controller.state.checklists().get_untracked();
        assert_eq!(checklists[0].title, "Preparação para Reunião");
        assert_eq!(checklists[1].title, "Setup Projeto X");
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_the_visible_list() {
        let controller = demo_controller();
        controller.load().await;
        let before = controller.state.checklists().get_untracked();

        // Swap in a failing source, keeping the populated store
        let source = FailingSource::new();
        let controller = ChecklistController::new(source.clone(), controller.state);
        let err = controller.delete("1").await.unwrap_err();

        assert!(matches!(err, AppError::Transport { .. }));
        assert_eq!(controller.state.checklists().get_untracked(), before);
    }

    #[tokio::test]
    async fn test_delete_removes_locally_after_success() {
        let controller = demo_controller();
        controller.load().await;
        controller.delete("1").await.unwrap();

        let checklists = controller.state.checklists().get_untracked();
        assert_eq!(checklists.len(), 1);
        assert_eq!(checklists[0].id, "2");
    }

    #[tokio::test]
    async fn test_toggle_replaces_single_item_and_recounts() {
        let controller = demo_controller();
        controller.load().await;
        controller.toggle_item("2").await;

        let checklists = controller.state.checklists().get_untracked();
        let meeting = &checklists[0];
        let item = meeting.items.iter().find(|i| i.id == "2").unwrap();
        assert!(item.is_completed);
        assert_eq!(meeting.completed_items, 3);
        assert_eq!(meeting.completion_percentage, 100);
        // Everything else untouched
        assert!(checklists[1].items.iter().filter(|i| i.is_completed).count() == 2);
    }

    #[tokio::test]
    async fn test_toggle_unknown_item_is_a_silent_noop() {
        let source = FailingSource::new();
        let controller =
            ChecklistController::new(source.clone(), Store::new(AppState::default()));
        controller.toggle_item("missing").await;
        // Owner lookup misses, so the source is never consulted
        assert_eq!(source.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_toggle_failure_marks_item_inline() {
        let controller = demo_controller();
        controller.load().await;

        let source = FailingSource::new();
        let controller = ChecklistController::new(source.clone(), controller.state);
        controller.toggle_item("2").await;

        assert_eq!(source.calls.get(), 1);
        let errors = controller.state.toggle_errors().get_untracked();
        assert_eq!(errors, vec!["2".to_string()]);
        // Item state itself unchanged
        let checklists = controller.state.checklists().get_untracked();
        let item = checklists[0].items.iter().find(|i| i.id == "2").unwrap();
        assert!(!item.is_completed);
    }

    #[tokio::test]
    async fn test_add_item_appends_and_recounts() {
        let controller = demo_controller();
        controller.load().await;
        controller
            .add_item(
                "1",
                ItemDraft {
                    description: "Reservar sala".to_string(),
                    priority: Some(Priority::Low),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let checklists = controller.state.checklists().get_untracked();
        let meeting = &checklists[0];
        assert_eq!(meeting.total_items, 4);
        assert_eq!(meeting.items.last().unwrap().description, "Reservar sala");
        assert_eq!(meeting.completion_percentage, 50);
    }

    #[tokio::test]
    async fn test_remove_item_only_after_remote_success() {
        let controller = demo_controller();
        controller.load().await;

        let source = FailingSource::new();
        let failing = ChecklistController::new(source.clone(), controller.state);
        assert!(failing.remove_item("1", "3").await.is_err());
        assert_eq!(
            failing.state.checklists().get_untracked()[0].total_items,
            3
        );

        controller.remove_item("1", "3").await.unwrap();
        assert_eq!(
            controller.state.checklists().get_untracked()[0].total_items,
            2
        );
    }
}
