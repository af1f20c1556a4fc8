//! Application Context
//!
//! Shared dashboard state provided via Leptos Context API: the checklist
//! controller plus the create/edit form target.

use leptos::prelude::*;

use crate::controller::ChecklistController;
use crate::models::Checklist;

/// What the checklist form is currently pointed at
#[derive(Clone, Debug, PartialEq)]
pub enum FormTarget {
    Create,
    Edit(Checklist),
}

/// Dashboard-wide context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub controller: ChecklistController,
    /// Open form, if any - read via `form_target`
    form_target: RwSignal<Option<FormTarget>>,
}

impl AppContext {
    pub fn new(controller: ChecklistController) -> Self {
        Self {
            controller,
            form_target: RwSignal::new(None),
        }
    }

    pub fn form_target(&self) -> RwSignal<Option<FormTarget>> {
        self.form_target
    }

    pub fn open_create(&self) {
        self.form_target.set(Some(FormTarget::Create));
    }

    pub fn open_edit(&self, checklist: Checklist) {
        self.form_target.set(Some(FormTarget::Edit(checklist)));
    }

    pub fn close_form(&self) {
        self.form_target.set(None);
    }
}

/// Get the dashboard context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
