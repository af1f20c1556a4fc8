//! Checklist and Item Endpoints

use super::types::{
    ChecklistCreate, ChecklistItemCreate, ChecklistItemResponse, ChecklistItemUpdate,
    ChecklistResponse, ChecklistUpdate, PaginatedResponse,
};
use crate::error::AppResult;

pub async fn list(skip: u32, limit: u32) -> AppResult<PaginatedResponse> {
    super::get_json(
        &format!("/checklists?skip={}&limit={}", skip, limit),
        "Failed to load checklists",
    )
    .await
}

pub async fn get(id: &str) -> AppResult<ChecklistResponse> {
    super::get_json(&format!("/checklists/{}", id), "Failed to load checklist").await
}

pub async fn create(data: &ChecklistCreate) -> AppResult<ChecklistResponse> {
    super::send_json("POST", "/checklists", data, "Failed to create checklist").await
}

pub async fn update(id: &str, data: &ChecklistUpdate) -> AppResult<ChecklistResponse> {
    super::send_json(
        "PUT",
        &format!("/checklists/{}", id),
        data,
        "Failed to update checklist",
    )
    .await
}

pub async fn delete(id: &str) -> AppResult<()> {
    super::delete(&format!("/checklists/{}", id), "Failed to delete checklist").await
}

pub async fn create_item(
    checklist_id: &str,
    data: &ChecklistItemCreate,
) -> AppResult<ChecklistItemResponse> {
    super::send_json(
        "POST",
        &format!("/checklists/{}/items", checklist_id),
        data,
        "Failed to add item",
    )
    .await
}

pub async fn update_item(
    checklist_id: &str,
    item_id: &str,
    data: &ChecklistItemUpdate,
) -> AppResult<ChecklistItemResponse> {
    super::send_json(
        "PUT",
        &format!("/checklists/{}/items/{}", checklist_id, item_id),
        data,
        "Failed to update item",
    )
    .await
}

pub async fn delete_item(checklist_id: &str, item_id: &str) -> AppResult<()> {
    super::delete(
        &format!("/checklists/{}/items/{}", checklist_id, item_id),
        "Failed to delete item",
    )
    .await
}

/// Flip completion server-side; the response is the authoritative item state
pub async fn toggle_item(checklist_id: &str, item_id: &str) -> AppResult<ChecklistItemResponse> {
    super::send_empty(
        "PATCH",
        &format!("/checklists/{}/items/{}/toggle", checklist_id, item_id),
        "Failed to update item completion",
    )
    .await
}
