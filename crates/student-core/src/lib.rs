//! Student Fee Dashboard Core
//!
//! Everything the dashboard does that does not touch the DOM:
//! - models: records and drafts exchanged with the backend
//! - validation: per-field rules and whole-form checks
//! - store: the in-memory list of confirmed records
//! - projection: search, status filter, sort and row formatting
//! - debounce: search box timer generations
//! - stats: total/paid/unpaid counters
//! - notification: transient status messages
//! - form: the Add/Edit form state machine
//! - api: backend contract, routes and error classification
//! - dashboard: the controller that owns all of the above

pub mod api;
pub mod config;
pub mod dashboard;
pub mod debounce;
pub mod form;
pub mod models;
pub mod notification;
pub mod projection;
pub mod stats;
pub mod store;
pub mod validation;

pub use api::{classify_failure, failure_body, ApiError, ApiResult, Routes, StudentApi};
pub use config::{ConfigError, DashboardConfig};
pub use dashboard::{Dashboard, LoadState, PendingSubmit, SubmitAction};
pub use debounce::{SearchDebounce, SearchToken};
pub use form::{FormController, FormFields, FormMode};
pub use models::{StudentDraft, StudentId, StudentRecord};
pub use notification::{Notification, NotificationCenter, NotificationId, NotificationKind};
pub use projection::{
    project, SortColumn, SortDirection, SortState, StatusFilter, ViewRow, ViewState,
};
pub use stats::DashboardStats;
pub use store::StudentStore;
pub use validation::{validate_field, validate_form, Field, FieldCheck, FormValidation};
