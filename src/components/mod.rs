//! UI Components
//!
//! Leptos components for the dashboard.

mod delete_confirm_button;
mod load_status;
mod stats_bar;
mod student_form;
mod student_table;
mod table_toolbar;
mod toast_container;

pub use delete_confirm_button::DeleteConfirmButton;
pub use load_status::LoadStatus;
pub use stats_bar::StatsBar;
pub use student_form::{scroll_to_form, StudentForm};
pub use student_table::StudentTable;
pub use table_toolbar::TableToolbar;
pub use toast_container::ToastContainer;
