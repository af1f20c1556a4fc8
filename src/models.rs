//! Frontend Models
//!
//! View-model shapes consumed by the components. These are distinct from the
//! wire DTOs in `api::types`; `mapper` is the only translation point between
//! the two.

use serde::{Deserialize, Serialize};

/// Authenticated user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
}

impl User {
    /// Name to greet the user with (email prefix when no display name is set)
    pub fn display_name(&self) -> &str {
        match &self.name {
            Some(name) => name,
            None => self.email.split('@').next().unwrap_or(&self.email),
        }
    }
}

/// Item priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "low" => Priority::Low,
            "high" => Priority::High,
            _ => Priority::Medium,
        }
    }

    /// Label shown on the priority badge
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Baixa",
            Priority::Medium => "Média",
            Priority::High => "Alta",
        }
    }
}

/// A single task entry within a checklist
///
/// `order` is the render position; on the wire the same field travels as
/// `display_order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub checklist_id: String,
    pub description: String,
    pub is_completed: bool,
    pub priority: Priority,
    pub order: u32,
    pub due_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub is_overdue: bool,
}

/// A titled, ordered collection of items belonging to one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checklist {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub items: Vec<ChecklistItem>,
    pub total_items: u32,
    pub completed_items: u32,
    /// Rounded percentage in 0..=100
    pub completion_percentage: u8,
}

/// One page of the checklist listing
#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistPage {
    pub items: Vec<Checklist>,
    pub total: u32,
    pub skip: u32,
    pub limit: u32,
}

/// `round(100 * completed / total)`, 0 when the checklist is empty
pub fn completion_percentage(completed: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    (100.0 * completed as f64 / total as f64).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_percentage_rounds() {
        assert_eq!(completion_percentage(2, 3), 67);
        assert_eq!(completion_percentage(1, 3), 33);
        assert_eq!(completion_percentage(2, 4), 50);
        assert_eq!(completion_percentage(3, 3), 100);
    }

    #[test]
    fn test_completion_percentage_empty_checklist() {
        assert_eq!(completion_percentage(0, 0), 0);
    }

    #[test]
    fn test_priority_round_trip() {
        assert_eq!(Priority::from_str("high"), Priority::High);
        assert_eq!(Priority::from_str("low").as_str(), "low");
        // Unknown values fall back to the default
        assert_eq!(Priority::from_str("urgent"), Priority::Medium);
    }

    #[test]
    fn test_display_name_falls_back_to_email_prefix() {
        let user = User {
            id: "u1".into(),
            email: "ana@example.com".into(),
            name: None,
        };
        assert_eq!(user.display_name(), "ana");
    }
}
