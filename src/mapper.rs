//! Resource Mapper
//!
//! Pure translation between the wire schema (`api::types`) and the view-model
//! schema (`models`). Every field rename lives here and nowhere else, in
//! particular `display_order` <-> `order`. No validation, no I/O.

use crate::api::types::{
    ChecklistCreate, ChecklistItemCreate, ChecklistItemResponse, ChecklistItemUpdate,
    ChecklistResponse, ChecklistSummary, ChecklistUpdate, UserResponse,
};
use crate::models::{completion_percentage, Checklist, ChecklistItem, Priority, User};

// ========================
// Draft / change inputs
// ========================

/// Item as captured by the create form, before it has a server identity
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDraft {
    pub description: String,
    pub priority: Option<Priority>,
    pub due_date: Option<String>,
    /// Ignored on submission; `display_order` is derived from array position
    pub order: Option<u32>,
}

/// Checklist as captured by the create form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChecklistDraft {
    pub title: String,
    pub description: Option<String>,
    pub items: Vec<ItemDraft>,
}

/// Partial checklist edit (title/description only, per the update contract)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChecklistChanges {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Partial item edit; `None` fields are left untouched server-side
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemChanges {
    pub description: Option<String>,
    pub is_completed: Option<bool>,
    pub priority: Option<Priority>,
    pub due_date: Option<String>,
    pub order: Option<u32>,
}

// ========================
// Wire -> view
// ========================

pub fn to_view_user(wire: UserResponse) -> User {
    User {
        id: wire.id,
        email: wire.email,
        name: wire.name,
    }
}

pub fn to_view_item(wire: ChecklistItemResponse) -> ChecklistItem {
    ChecklistItem {
        id: wire.id,
        checklist_id: wire.checklist_id,
        description: wire.description,
        is_completed: wire.is_completed,
        priority: wire.priority,
        order: wire.display_order,
        due_date: wire.due_date,
        created_at: wire.created_at,
        updated_at: wire.updated_at,
        is_overdue: wire.is_overdue,
    }
}

pub fn to_view_checklist(wire: ChecklistResponse) -> Checklist {
    Checklist {
        id: wire.id,
        title: wire.title,
        description: wire.description,
        created_at: wire.created_at,
        updated_at: wire.updated_at,
        items: wire.items.into_iter().map(to_view_item).collect(),
        total_items: wire.total_items,
        completed_items: wire.completed_items,
        completion_percentage: wire.completion_percentage.round() as u8,
    }
}

/// Listing entries carry no items; the view side gets an empty sequence
pub fn to_view_summary(wire: ChecklistSummary) -> Checklist {
    Checklist {
        id: wire.id,
        title: wire.title,
        description: wire.description,
        created_at: wire.created_at,
        updated_at: wire.updated_at,
        items: Vec::new(),
        total_items: wire.total_items,
        completed_items: wire.completed_items,
        completion_percentage: wire.completion_percentage.round() as u8,
    }
}

// ========================
// View -> wire
// ========================

/// Create payload. `display_order` is assigned strictly from the zero-based
/// position in submission order; any `order` carried by a draft is ignored.
pub fn to_wire_checklist_create(draft: ChecklistDraft) -> ChecklistCreate {
    ChecklistCreate {
        title: draft.title,
        description: draft.description,
        items: draft
            .items
            .into_iter()
            .enumerate()
            .map(|(index, item)| ChecklistItemCreate {
                description: item.description,
                priority: item.priority.unwrap_or_default(),
                due_date: item.due_date,
                display_order: index as u32,
            })
            .collect(),
    }
}

pub fn to_wire_checklist_update(changes: ChecklistChanges) -> ChecklistUpdate {
    ChecklistUpdate {
        title: changes.title,
        description: changes.description,
    }
}

/// Partial update payload: only fields present in the input survive, so an
/// update never clobbers server fields it did not mention.
pub fn to_wire_item_update(changes: ItemChanges) -> ChecklistItemUpdate {
    ChecklistItemUpdate {
        description: changes.description,
        is_completed: changes.is_completed,
        priority: changes.priority,
        due_date: changes.due_date,
        display_order: changes.order,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire_item(id: &str, display_order: u32) -> ChecklistItemResponse {
        ChecklistItemResponse {
            id: id.to_string(),
            checklist_id: "c1".to_string(),
            description: "Comprar café".to_string(),
            is_completed: false,
            priority: Priority::High,
            due_date: Some("2026-08-10T12:00:00Z".to_string()),
            display_order,
            created_at: "2026-08-01T09:00:00Z".to_string(),
            updated_at: "2026-08-01T09:00:00Z".to_string(),
            is_overdue: false,
        }
    }

    #[test]
    fn test_item_order_rename() {
        let view = to_view_item(wire_item("i1", 4));
        assert_eq!(view.order, 4);
        assert_eq!(view.priority, Priority::High);
        assert_eq!(view.due_date.as_deref(), Some("2026-08-10T12:00:00Z"));
    }

    #[test]
    fn test_checklist_without_items_maps_to_empty_sequence() {
        let view = to_view_summary(ChecklistSummary {
            id: "c1".to_string(),
            title: "Compras".to_string(),
            description: None,
            created_at: "2026-08-01T09:00:00Z".to_string(),
            updated_at: "2026-08-01T09:00:00Z".to_string(),
            total_items: 3,
            completed_items: 2,
            completion_percentage: 66.666,
        });
        assert!(view.items.is_empty());
        assert_eq!(view.completion_percentage, 67);
    }

    #[test]
    fn test_create_assigns_display_order_by_position() {
        // Drafts arrive with stale order values; submission order wins
        let draft = ChecklistDraft {
            title: "Viagem".to_string(),
            description: None,
            items: vec![
                ItemDraft {
                    description: "Passaporte".to_string(),
                    order: Some(9),
                    ..Default::default()
                },
                ItemDraft {
                    description: "Reservar hotel".to_string(),
                    order: Some(0),
                    priority: Some(Priority::Low),
                    ..Default::default()
                },
                ItemDraft {
                    description: "Fazer malas".to_string(),
                    ..Default::default()
                },
            ],
        };
        let wire = to_wire_checklist_create(draft);
        let orders: Vec<u32> = wire.items.iter().map(|i| i.display_order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
        // Absent priority defaults to medium
        assert_eq!(wire.items[0].priority, Priority::Medium);
        assert_eq!(wire.items[1].priority, Priority::Low);
        assert_eq!(wire.items[2].due_date, None);
    }

    #[test]
    fn test_item_update_drops_absent_fields() {
        let wire = to_wire_item_update(ItemChanges {
            description: Some("x".to_string()),
            ..Default::default()
        });
        let json = serde_json::to_value(&wire).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert!(obj.contains_key("description"));
        assert!(!obj.contains_key("is_completed"));
        assert!(!obj.contains_key("display_order"));
    }

    #[test]
    fn test_item_update_round_trip_preserves_present_fields() {
        let original = to_view_item(wire_item("i2", 1));
        let changes = ItemChanges {
            description: Some(original.description.clone()),
            is_completed: Some(original.is_completed),
            priority: Some(original.priority),
            due_date: original.due_date.clone(),
            order: Some(original.order),
        };
        let wire = to_wire_item_update(changes);
        assert_eq!(wire.description.as_deref(), Some("Comprar café"));
        assert_eq!(wire.is_completed, Some(false));
        assert_eq!(wire.priority, Some(Priority::High));
        assert_eq!(wire.display_order, Some(1));
    }

    #[test]
    fn test_priority_serializes_lowercase() {
        let wire = to_wire_item_update(ItemChanges {
            priority: Some(Priority::High),
            ..Default::default()
        });
        let json = serde_json::to_value(&wire).unwrap();
        assert_eq!(json["priority"], "high");
    }
}
