//! UI Components

mod checklist_card;
mod checklist_form;
mod dashboard;
mod delete_confirm_button;
mod item_row;
mod login_view;

pub use checklist_card::ChecklistCard;
pub use checklist_form::ChecklistForm;
pub use dashboard::Dashboard;
pub use delete_confirm_button::DeleteConfirmButton;
pub use item_row::ItemRow;
pub use login_view::LoginView;
