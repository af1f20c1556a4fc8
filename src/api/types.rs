//! Wire DTOs
//!
//! Request and response shapes exchanged with the backend, mirroring its JSON
//! schema field for field. Ordering travels as `display_order` here; the
//! view-model side calls it `order` (see `mapper`).

use serde::{Deserialize, Serialize};

use crate::models::Priority;

// ========================
// Auth
// ========================

#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    #[allow(dead_code)]
    pub created_at: String,
}

#[derive(Debug, Serialize)]
pub struct GoogleOAuthData<'a> {
    pub credential: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[allow(dead_code)]
    pub token_type: String,
    pub user: UserResponse,
}

// ========================
// Checklist responses
// ========================

#[derive(Debug, Clone, Deserialize)]
pub struct ChecklistItemResponse {
    pub id: String,
    pub checklist_id: String,
    pub description: String,
    pub is_completed: bool,
    #[serde(default)]
    pub priority: Priority,
    pub due_date: Option<String>,
    pub display_order: u32,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub is_overdue: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChecklistResponse {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub items: Vec<ChecklistItemResponse>,
    pub total_items: u32,
    pub completed_items: u32,
    pub completion_percentage: f64,
}

/// Listing entry: a checklist without its items
#[derive(Debug, Clone, Deserialize)]
pub struct ChecklistSummary {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub total_items: u32,
    pub completed_items: u32,
    pub completion_percentage: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaginatedResponse {
    pub items: Vec<ChecklistSummary>,
    pub total: u32,
    pub skip: u32,
    pub limit: u32,
}

// ========================
// Checklist requests
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChecklistItemCreate {
    pub description: String,
    pub priority: Priority,
    pub due_date: Option<String>,
    pub display_order: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChecklistCreate {
    pub title: String,
    pub description: Option<String>,
    pub items: Vec<ChecklistItemCreate>,
}

/// Partial update: absent fields are dropped from the payload so the server
/// never sees a key it should leave untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChecklistUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial item update, same dropped-keys contract as `ChecklistUpdate`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChecklistItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_order: Option<u32>,
}

// ========================
// Errors
// ========================

/// Structured error body returned by the backend
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
    #[allow(dead_code)]
    pub error_code: Option<String>,
}
