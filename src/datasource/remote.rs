//! Remote Data Source
//!
//! Api call plus mapper translation per operation. Pagination metadata is
//! passed through; listing entries arrive without items (the card fetches the
//! full checklist on expand via `get`).

use async_trait::async_trait;

use super::DataSource;
use crate::api;
use crate::error::AppResult;
use crate::mapper::{
    self, ChecklistChanges, ChecklistDraft, ItemChanges, ItemDraft,
};
use crate::models::{Checklist, ChecklistItem, ChecklistPage};

pub struct RemoteDataSource;

#[async_trait(?Send)]
impl DataSource for RemoteDataSource {
    async fn list(&self, skip: u32, limit: u32) -> AppResult<ChecklistPage> {
        let page = api::checklist::list(skip, limit).await?;
        Ok(ChecklistPage {
            items: page.items.into_iter().map(mapper::to_view_summary).collect(),
            total: page.total,
            skip: page.skip,
            limit: page.limit,
        })
    }

    async fn get(&self, id: &str) -> AppResult<Checklist> {
        let wire = api::checklist::get(id).await?;
        Ok(mapper::to_view_checklist(wire))
    }

    async fn create(&self, draft: ChecklistDraft) -> AppResult<Checklist> {
        let payload = mapper::to_wire_checklist_create(draft);
        let wire = api::checklist::create(&payload).await?;
        Ok(mapper::to_view_checklist(wire))
    }

    async fn update(&self, id: &str, changes: ChecklistChanges) -> AppResult<Checklist> {
        let payload = mapper::to_wire_checklist_update(changes);
        let wire = api::checklist::update(id, &payload).await?;
        Ok(mapper::to_view_checklist(wire))
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        api::checklist::delete(id).await
    }

    async fn create_item(
        &self,
        checklist_id: &str,
        draft: ItemDraft,
    ) -> AppResult<ChecklistItem> {
        // A single appended item: the server assigns it after the existing ones,
        // so the submitted display_order is its position hint only.
        let payload = crate::api::types::ChecklistItemCreate {
            description: draft.description,
            priority: draft.priority.unwrap_or_default(),
            due_date: draft.due_date,
            display_order: draft.order.unwrap_or(0),
        };
        let wire = api::checklist::create_item(checklist_id, &payload).await?;
        Ok(mapper::to_view_item(wire))
    }

    async fn update_item(
        &self,
        checklist_id: &str,
        item_id: &str,
        changes: ItemChanges,
    ) -> AppResult<ChecklistItem> {
        let payload = mapper::to_wire_item_update(changes);
        let wire = api::checklist::update_item(checklist_id, item_id, &payload).await?;
        Ok(mapper::to_view_item(wire))
    }

    async fn delete_item(&self, checklist_id: &str, item_id: &str) -> AppResult<()> {
        api::checklist::delete_item(checklist_id, item_id).await
    }

    async fn toggle_item(&self, checklist_id: &str, item_id: &str) -> AppResult<ChecklistItem> {
        let wire = api::checklist::toggle_item(checklist_id, item_id).await?;
        Ok(mapper::to_view_item(wire))
    }
}
