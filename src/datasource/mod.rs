//! Data Source Layer
//!
//! One polymorphic capability for everything the checklist controller needs
//! from "the backend". Two implementations: `RemoteDataSource` speaks HTTP
//! through the api client, `InMemoryDemoDataSource` fabricates data locally.
//! The variant is chosen once, at session start, from the stored token shape;
//! nothing downstream inspects the token again.

mod demo;
mod remote;

pub use demo::InMemoryDemoDataSource;
pub use remote::RemoteDataSource;

use std::rc::Rc;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::mapper::{ChecklistChanges, ChecklistDraft, ItemChanges, ItemDraft};
use crate::models::{Checklist, ChecklistItem, ChecklistPage};
use crate::token;

/// Contract shared by the remote and demo backends. All shapes are
/// view-models; wire translation is internal to the remote implementation.
#[async_trait(?Send)]
pub trait DataSource {
    async fn list(&self, skip: u32, limit: u32) -> AppResult<ChecklistPage>;

    async fn get(&self, id: &str) -> AppResult<Checklist>;

    async fn create(&self, draft: ChecklistDraft) -> AppResult<Checklist>;

    async fn update(&self, id: &str, changes: ChecklistChanges) -> AppResult<Checklist>;

    async fn delete(&self, id: &str) -> AppResult<()>;

    async fn create_item(&self, checklist_id: &str, draft: ItemDraft)
        -> AppResult<ChecklistItem>;

    async fn update_item(
        &self,
        checklist_id: &str,
        item_id: &str,
        changes: ItemChanges,
    ) -> AppResult<ChecklistItem>;

    async fn delete_item(&self, checklist_id: &str, item_id: &str) -> AppResult<()>;

    /// Flip completion. The returned item is authoritative for
    /// `is_completed`, `is_overdue` and timestamps.
    async fn toggle_item(&self, checklist_id: &str, item_id: &str) -> AppResult<ChecklistItem>;
}

/// Select the data source for a session token. The demo sentinel gets the
/// in-memory source; anything else talks to the real backend.
pub fn from_token(token: &str) -> Rc<dyn DataSource> {
    if token::is_demo(token) {
        Rc::new(InMemoryDemoDataSource::seeded())
    } else {
        Rc::new(RemoteDataSource)
    }
}
