//! In-Memory Demo Data Source
//!
//! Client-only simulation used by demo sessions: canned seed data, locally
//! generated ids, no network. Every reply is delayed a little so the UI's
//! loading states stay visible. The mutable state lives behind a `RefCell`;
//! execution is single-threaded so no further coordination is needed.

use std::cell::RefCell;

use async_trait::async_trait;
use chrono::{DateTime, Duration, SecondsFormat, Utc};

use super::DataSource;
use crate::error::{AppError, AppResult};
use crate::mapper::{ChecklistChanges, ChecklistDraft, ItemChanges, ItemDraft};
use crate::models::{Checklist, ChecklistItem, ChecklistPage, Priority};
use crate::store::recompute_counters;

pub struct InMemoryDemoDataSource {
    state: RefCell<DemoState>,
}

impl InMemoryDemoDataSource {
    /// Demo source pre-seeded with the two sample checklists
    pub fn seeded() -> Self {
        Self {
            state: RefCell::new(DemoState::seeded()),
        }
    }
}

async fn simulate_latency() {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(600).await;
}

fn not_found(what: &str) -> AppError {
    AppError::Transport {
        message: format!("{} not found", what),
    }
}

#[async_trait(?Send)]
impl DataSource for InMemoryDemoDataSource {
    async fn list(&self, skip: u32, limit: u32) -> AppResult<ChecklistPage> {
        simulate_latency().await;
        Ok(self.state.borrow().list_page(skip, limit))
    }

    async fn get(&self, id: &str) -> AppResult<Checklist> {
        simulate_latency().await;
        self.state
            .borrow()
            .get(id)
            .ok_or_else(|| not_found("Checklist"))
    }

    async fn create(&self, draft: ChecklistDraft) -> AppResult<Checklist> {
        simulate_latency().await;
        Ok(self.state.borrow_mut().create(draft))
    }

    async fn update(&self, id: &str, changes: ChecklistChanges) -> AppResult<Checklist> {
        simulate_latency().await;
        self.state
            .borrow_mut()
            .update(id, changes)
            .ok_or_else(|| not_found("Checklist"))
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        simulate_latency().await;
        if self.state.borrow_mut().delete(id) {
            Ok(())
        } else {
            Err(not_found("Checklist"))
        }
    }

    async fn create_item(
        &self,
        checklist_id: &str,
        draft: ItemDraft,
    ) -> AppResult<ChecklistItem> {
        simulate_latency().await;
        self.state
            .borrow_mut()
            .create_item(checklist_id, draft)
            .ok_or_else(|| not_found("Checklist"))
    }

    async fn update_item(
        &self,
        checklist_id: &str,
        item_id: &str,
        changes: ItemChanges,
    ) -> AppResult<ChecklistItem> {
        simulate_latency().await;
        self.state
            .borrow_mut()
            .update_item(checklist_id, item_id, changes)
            .ok_or_else(|| not_found("Item"))
    }

    async fn delete_item(&self, checklist_id: &str, item_id: &str) -> AppResult<()> {
        simulate_latency().await;
        if self.state.borrow_mut().delete_item(checklist_id, item_id) {
            Ok(())
        } else {
            Err(not_found("Item"))
        }
    }

    async fn toggle_item(&self, checklist_id: &str, item_id: &str) -> AppResult<ChecklistItem> {
        simulate_latency().await;
        self.state
            .borrow_mut()
            .toggle_item(checklist_id, item_id)
            .ok_or_else(|| not_found("Item"))
    }
}

// ========================
// State
// ========================

struct DemoState {
    checklists: Vec<Checklist>,
    next_id: u64,
}

fn now_string() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn days_from_now(days: i64) -> String {
    (Utc::now() + Duration::days(days)).to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// An open item past its due date is overdue
fn compute_overdue(due_date: Option<&str>, is_completed: bool) -> bool {
    if is_completed {
        return false;
    }
    due_date
        .and_then(|d| DateTime::parse_from_rfc3339(d).ok())
        .map(|d| d.with_timezone(&Utc) < Utc::now())
        .unwrap_or(false)
}

impl DemoState {
    fn seeded() -> Self {
        let mut state = Self {
            checklists: Vec::new(),
            next_id: 100,
        };

        let meeting = seed_checklist(
            "1",
            "Preparação para Reunião",
            Some("Reunião de planejamento de quinta-feira"),
            -3,
            vec![
                seed_item("1", "1", "Revisar agenda", true, Priority::High, None),
                seed_item(
                    "2",
                    "1",
                    "Preparar apresentação",
                    false,
                    Priority::High,
                    Some(days_from_now(2)),
                ),
                seed_item("3", "1", "Enviar convites", true, Priority::Medium, None),
            ],
        );
        let project = seed_checklist(
            "2",
            "Setup Novo Projeto",
            Some("Checklist padrão para novos repositórios"),
            -7,
            vec![
                seed_item("4", "2", "Criar repositório", true, Priority::Medium, None),
                seed_item("5", "2", "Configurar CI/CD", true, Priority::High, None),
                seed_item(
                    "6",
                    "2",
                    "Definir arquitetura",
                    false,
                    Priority::Medium,
                    Some(days_from_now(5)),
                ),
                seed_item(
                    "7",
                    "2",
                    "Documentar requisitos",
                    false,
                    Priority::Low,
                    Some(days_from_now(-2)),
                ),
            ],
        );
        state.checklists.push(meeting);
        state.checklists.push(project);
        state
    }

    fn next_id(&mut self) -> String {
        let id = self.next_id;
        self.next_id += 1;
        id.to_string()
    }

    fn list_page(&self, skip: u32, limit: u32) -> ChecklistPage {
        let items: Vec<Checklist> = self
            .checklists
            .iter()
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        ChecklistPage {
            items,
            total: self.checklists.len() as u32,
            skip,
            limit,
        }
    }

    fn get(&self, id: &str) -> Option<Checklist> {
        self.checklists.iter().find(|c| c.id == id).cloned()
    }

    fn create(&mut self, draft: ChecklistDraft) -> Checklist {
        let checklist_id = self.next_id();
        let now = now_string();
        let items: Vec<ChecklistItem> = draft
            .items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let due_date = item.due_date;
                ChecklistItem {
                    id: self.next_id(),
                    checklist_id: checklist_id.clone(),
                    description: item.description,
                    is_completed: false,
                    priority: item.priority.unwrap_or_default(),
                    order: index as u32,
                    is_overdue: compute_overdue(due_date.as_deref(), false),
                    due_date,
                    created_at: now.clone(),
                    updated_at: now.clone(),
                }
            })
            .collect();

        let mut checklist = Checklist {
            id: checklist_id,
            title: draft.title,
            description: draft.description,
            created_at: now.clone(),
            updated_at: now,
            items,
            total_items: 0,
            completed_items: 0,
            completion_percentage: 0,
        };
        recompute_counters(&mut checklist);
        // Most-recent-first, so a reload matches what the controller shows
        self.checklists.insert(0, checklist.clone());
        checklist
    }

    fn update(&mut self, id: &str, changes: ChecklistChanges) -> Option<Checklist> {
        let checklist = self.checklists.iter_mut().find(|c| c.id == id)?;
        if let Some(title) = changes.title {
            checklist.title = title;
        }
        if let Some(description) = changes.description {
            checklist.description = Some(description);
        }
        checklist.updated_at = now_string();
        Some(checklist.clone())
    }

    fn delete(&mut self, id: &str) -> bool {
        let before = self.checklists.len();
        self.checklists.retain(|c| c.id != id);
        self.checklists.len() < before
    }

    fn create_item(&mut self, checklist_id: &str, draft: ItemDraft) -> Option<ChecklistItem> {
        let item_id = self.next_id();
        let checklist = self.checklists.iter_mut().find(|c| c.id == checklist_id)?;
        let now = now_string();
        let due_date = draft.due_date;
        let item = ChecklistItem {
            id: item_id,
            checklist_id: checklist_id.to_string(),
            description: draft.description,
            is_completed: false,
            priority: draft.priority.unwrap_or_default(),
            order: checklist.items.len() as u32,
            is_overdue: compute_overdue(due_date.as_deref(), false),
            due_date,
            created_at: now.clone(),
            updated_at: now,
        };
        checklist.items.push(item.clone());
        recompute_counters(checklist);
        Some(item)
    }

    fn update_item(
        &mut self,
        checklist_id: &str,
        item_id: &str,
        changes: ItemChanges,
    ) -> Option<ChecklistItem> {
        let checklist = self.checklists.iter_mut().find(|c| c.id == checklist_id)?;
        let item = checklist.items.iter_mut().find(|i| i.id == item_id)?;
        if let Some(description) = changes.description {
            item.description = description;
        }
        if let Some(is_completed) = changes.is_completed {
            item.is_completed = is_completed;
        }
        if let Some(priority) = changes.priority {
            item.priority = priority;
        }
        if let Some(due_date) = changes.due_date {
            item.due_date = Some(due_date);
        }
        if let Some(order) = changes.order {
            item.order = order;
        }
        item.updated_at = now_string();
        item.is_overdue = compute_overdue(item.due_date.as_deref(), item.is_completed);
        let snapshot = item.clone();
        recompute_counters(checklist);
        Some(snapshot)
    }

    fn delete_item(&mut self, checklist_id: &str, item_id: &str) -> bool {
        let Some(checklist) = self.checklists.iter_mut().find(|c| c.id == checklist_id) else {
            return false;
        };
        let before = checklist.items.len();
        checklist.items.retain(|i| i.id != item_id);
        let removed = checklist.items.len() < before;
        if removed {
            recompute_counters(checklist);
        }
        removed
    }

    /// Scoped to the owning checklist; a miss is a no-op for the caller
    fn toggle_item(&mut self, checklist_id: &str, item_id: &str) -> Option<ChecklistItem> {
        let checklist = self.checklists.iter_mut().find(|c| c.id == checklist_id)?;
        let item = checklist.items.iter_mut().find(|i| i.id == item_id)?;
        item.is_completed = !item.is_completed;
        item.updated_at = now_string();
        item.is_overdue = compute_overdue(item.due_date.as_deref(), item.is_completed);
        let snapshot = item.clone();
        recompute_counters(checklist);
        Some(snapshot)
    }
}

fn seed_checklist(
    id: &str,
    title: &str,
    description: Option<&str>,
    created_days_ago: i64,
    items: Vec<ChecklistItem>,
) -> Checklist {
    let stamp = days_from_now(created_days_ago);
    let mut items = items;
    for (index, item) in items.iter_mut().enumerate() {
        item.order = index as u32;
    }
    let mut checklist = Checklist {
        id: id.to_string(),
        title: title.to_string(),
        description: description.map(|d| d.to_string()),
        created_at: stamp.clone(),
        updated_at: stamp,
        items,
        total_items: 0,
        completed_items: 0,
        completion_percentage: 0,
    };
    recompute_counters(&mut checklist);
    checklist
}

fn seed_item(
    id: &str,
    checklist_id: &str,
    description: &str,
    is_completed: bool,
    priority: Priority,
    due_date: Option<String>,
) -> ChecklistItem {
    let stamp = days_from_now(-3);
    ChecklistItem {
        id: id.to_string(),
        checklist_id: checklist_id.to_string(),
        description: description.to_string(),
        is_completed,
        priority,
        order: 0,
        is_overdue: compute_overdue(due_date.as_deref(), is_completed),
        due_date,
        created_at: stamp.clone(),
        updated_at: stamp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_matches_demo_dataset() {
        let state = DemoState::seeded();
        let page = state.list_page(0, 20);
        assert_eq!(page.total, 2);

        let meeting = &page.items[0];
        assert_eq!(meeting.title, "Preparação para Reunião");
        assert_eq!(meeting.total_items, 3);
        assert_eq!(meeting.completed_items, 2);
        assert_eq!(meeting.completion_percentage, 67);

        let project = &page.items[1];
        assert_eq!(project.title, "Setup Novo Projeto");
        assert_eq!(project.total_items, 4);
        assert_eq!(project.completed_items, 2);
        assert_eq!(project.completion_percentage, 50);
    }

    #[test]
    fn test_toggle_flips_only_the_target_item() {
        let mut state = DemoState::seeded();
        let before: Vec<(String, bool)> = state.checklists[0]
            .items
            .iter()
            .chain(state.checklists[1].items.iter())
            .map(|i| (i.id.clone(), i.is_completed))
            .collect();

        let toggled = state.toggle_item("1", "2").expect("item 2 exists");
        assert_eq!(toggled.description, "Preparar apresentação");
        assert!(toggled.is_completed);
        assert_eq!(state.checklists[0].completion_percentage, 100);

        for (id, was_completed) in before {
            if id == "2" {
                continue;
            }
            let still = state.checklists[0]
                .items
                .iter()
                .chain(state.checklists[1].items.iter())
                .find(|i| i.id == id)
                .unwrap();
            assert_eq!(still.is_completed, was_completed, "item {} changed", id);
        }
    }

    #[test]
    fn test_toggle_is_scoped_to_the_owning_checklist() {
        let mut state = DemoState::seeded();
        // Item 4 belongs to checklist 2; asking checklist 1 must not find it
        assert!(state.toggle_item("1", "4").is_none());
        assert!(state.checklists[1].items[0].is_completed);
    }

    #[test]
    fn test_create_marks_every_item_incomplete() {
        let mut state = DemoState::seeded();
        let created = state.create(ChecklistDraft {
            title: "Compras".to_string(),
            description: None,
            items: vec![
                ItemDraft {
                    description: "Café".to_string(),
                    ..Default::default()
                },
                ItemDraft {
                    description: "Leite".to_string(),
                    priority: Some(Priority::Low),
                    ..Default::default()
                },
            ],
        });
        assert!(created.items.iter().all(|i| !i.is_completed));
        assert_eq!(created.completion_percentage, 0);
        let orders: Vec<u32> = created.items.iter().map(|i| i.order).collect();
        assert_eq!(orders, vec![0, 1]);
        // New checklist lands at the front of the canned list
        assert_eq!(state.checklists[0].id, created.id);
    }

    #[test]
    fn test_update_merges_fields_in_place() {
        let mut state = DemoState::seeded();
        let updated = state
            .update(
                "2",
                ChecklistChanges {
                    title: Some("Setup Projeto X".to_string()),
                    description: None,
                },
            )
            .unwrap();
        assert_eq!(updated.title, "Setup Projeto X");
        // Unspecified description kept
        assert_eq!(
            updated.description.as_deref(),
            Some("Checklist padrão para novos repositórios")
        );
        assert_eq!(state.checklists.len(), 2);
    }

    #[test]
    fn test_delete_item_recomputes_counters() {
        let mut state = DemoState::seeded();
        assert!(state.delete_item("2", "7"));
        let project = &state.checklists[1];
        assert_eq!(project.total_items, 3);
        assert_eq!(project.completion_percentage, 67);
    }

    #[test]
    fn test_overdue_computation() {
        assert!(compute_overdue(Some(&days_from_now(-1)), false));
        assert!(!compute_overdue(Some(&days_from_now(-1)), true));
        assert!(!compute_overdue(Some(&days_from_now(1)), false));
        assert!(!compute_overdue(None, false));
    }
}
