//! Dashboard Controller
//!
//! The one application-state object: store, view state, form, toasts and
//! load status. Operations come in two halves (`begin_*` / `finish_*`) so a
//! reactive UI can release its borrow while the request is in flight; the
//! async methods compose both halves over any [`StudentApi`].

use crate::api::{ApiError, ApiResult, StudentApi};
use crate::config::DashboardConfig;
use crate::debounce::{SearchDebounce, SearchToken};
use crate::form::{FormController, FormMode};
use crate::models::{StudentDraft, StudentId, StudentRecord};
use crate::notification::{NotificationCenter, NotificationId, NotificationKind};
use crate::projection::{project, SortColumn, StatusFilter, ViewRow, ViewState};
use crate::stats::DashboardStats;
use crate::store::StudentStore;
use crate::validation::Field;

/// Status of the list request that fills the table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Persistent banner text
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn banner(&self) -> Option<&str> {
        match self {
            LoadState::Failed(banner) => Some(banner),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAction {
    Create,
    Update(StudentId),
}

/// A validated submit waiting on the backend
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmit {
    pub action: SubmitAction,
    pub draft: StudentDraft,
}

impl PendingSubmit {
    /// Issue the create or update this submit stands for
    pub async fn send<A: StudentApi + ?Sized>(&self, api: &A) -> ApiResult<StudentRecord> {
        match self.action {
            SubmitAction::Create => api.create(&self.draft).await,
            SubmitAction::Update(id) => api.update(id, &self.draft).await,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    config: DashboardConfig,
    students: StudentStore,
    view: ViewState,
    search: SearchDebounce,
    form: FormController,
    notifications: NotificationCenter,
    load_state: LoadState,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}

impl Dashboard {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            notifications: NotificationCenter::new(config.toast_duration_ms),
            config,
            students: StudentStore::new(),
            view: ViewState::default(),
            search: SearchDebounce::new(),
            form: FormController::new(),
            load_state: LoadState::Idle,
        }
    }

    // ========================
    // Accessors
    // ========================

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn students(&self) -> &StudentStore {
        &self.students
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// Table rows for the current store and view state
    pub fn rows(&self) -> Vec<ViewRow> {
        project(self.students.all(), &self.view, &self.config.currency_symbol)
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::from_records(self.students.all())
    }

    // ========================
    // View state
    // ========================

    /// Search box contents as typed, ahead of the debounce
    pub fn search_input(&self) -> &str {
        self.search.typed()
    }

    /// Keystroke in the search box. The table is not re-derived until
    /// `fire_search` is called with the returned token.
    pub fn type_search(&mut self, text: impl Into<String>) -> SearchToken {
        self.search.arm(text)
    }

    /// Debounce timer expiry. Only the most recent keystroke's token applies
    /// its text; returns false for a superseded one.
    pub fn fire_search(&mut self, token: SearchToken) -> bool {
        match self.search.fire(token) {
            Some(text) => {
                self.set_search_text(text);
                true
            }
            None => false,
        }
    }

    fn set_search_text(&mut self, text: impl Into<String>) {
        self.view.search_text = text.into();
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.view.status_filter = filter;
    }

    pub fn click_sort(&mut self, column: SortColumn) {
        self.view.sort.click(column);
    }

    // ========================
    // Notifications
    // ========================

    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) -> NotificationId {
        self.notifications.push(kind, message)
    }

    pub fn dismiss_notification(&mut self, id: NotificationId) -> bool {
        self.notifications.dismiss(id)
    }

    // ========================
    // Load
    // ========================

    pub fn begin_load(&mut self) {
        self.load_state = LoadState::Loading;
    }

    pub fn finish_load(&mut self, result: ApiResult<Vec<StudentRecord>>) {
        match result {
            Ok(records) => {
                log::info!("[Dashboard] Loaded {} students", records.len());
                self.students.replace_all(records);
                self.load_state = LoadState::Loaded;
                self.notify(NotificationKind::Success, "Student data loaded successfully!");
            }
            Err(err) => {
                log::error!("[Dashboard] Load failed: {}", err);
                self.load_state = LoadState::Failed(format!(
                    "Error: {} Please ensure the backend is running.",
                    err.user_message()
                ));
                self.notify(NotificationKind::Error, "Failed to load student data.");
            }
        }
    }

    // ========================
    // Form
    // ========================

    pub fn set_form_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Row edit click. Stays in the current mode (with a warning) if `id` is unknown.
    pub fn begin_edit(&mut self, id: StudentId) -> bool {
        match self.students.find(id) {
            Some(record) => {
                self.form.begin_edit(record);
                true
            }
            None => {
                log::warn!("[Dashboard] Student not found for editing with ID: {}", id);
                self.notify(NotificationKind::Warning, "Student not found for editing.");
                false
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        self.form.reset();
    }

    /// Validate the form. Returns the request to send, or None (with field
    /// errors and a toast) when any rule fails.
    pub fn begin_submit(&mut self) -> Option<PendingSubmit> {
        let validation = self.form.validate();
        if !validation.is_valid() {
            log::debug!(
                "[Dashboard] Submit blocked, {} invalid field(s)",
                validation.failures().count()
            );
            self.notify(NotificationKind::Error, "Please correct the form errors.");
            return None;
        }
        let draft = self.form.fields().to_draft()?;
        let action = match self.form.mode() {
            FormMode::Add => SubmitAction::Create,
            FormMode::Edit(id) => SubmitAction::Update(id),
        };
        Some(PendingSubmit { action, draft })
    }

    /// Apply the backend's answer to a submit. Failures leave the form as typed.
    pub fn finish_submit(&mut self, pending: &PendingSubmit, result: ApiResult<StudentRecord>) {
        match (pending.action, result) {
            (SubmitAction::Create, Ok(record)) => {
                log::info!("[Dashboard] Created student {}", record.id);
                self.students.append(record);
                self.form.reset();
                self.notify(NotificationKind::Success, "Student added successfully!");
            }
            (SubmitAction::Update(id), Ok(record)) => {
                if !self.students.replace_by_id(id, record) {
                    log::warn!("[Dashboard] Updated student {} is no longer in the list", id);
                }
                self.form.reset();
                self.notify(NotificationKind::Success, "Student updated successfully!");
            }
            (SubmitAction::Create, Err(err)) => {
                self.report_failure("Add", "adding", &err);
            }
            (SubmitAction::Update(id), Err(err)) => {
                if err.is_not_found() {
                    log::warn!("[Dashboard] Student {} no longer exists on the server", id);
                }
                self.report_failure("Update", "updating", &err);
            }
        }
    }

    // ========================
    // Delete
    // ========================

    /// Apply the backend's answer to a confirmed delete. Form mode is untouched.
    pub fn finish_delete(&mut self, id: StudentId, result: ApiResult<()>) {
        match result {
            Ok(()) => {
                if !self.students.remove_by_id(id) {
                    log::warn!("[Dashboard] Deleted student {} was not in the list", id);
                }
                self.notify(NotificationKind::Info, "Student deleted successfully!");
            }
            Err(err) => self.report_failure("Delete", "deleting", &err),
        }
    }

    fn report_failure(&mut self, op: &str, verb: &str, err: &ApiError) {
        log::error!("[Dashboard] {} error: {}", op, err);
        self.notify(
            NotificationKind::Error,
            format!("Error {} student: {}", verb, err.user_message()),
        );
    }

    // ========================
    // Async operations
    // ========================

    pub async fn load<A: StudentApi + ?Sized>(&mut self, api: &A) {
        self.begin_load();
        let result = api.list().await;
        self.finish_load(result);
    }

    /// Returns true if the backend accepted the submit
    pub async fn submit<A: StudentApi + ?Sized>(&mut self, api: &A) -> bool {
        let Some(pending) = self.begin_submit() else {
            return false;
        };
        let result = pending.send(api).await;
        let ok = result.is_ok();
        self.finish_submit(&pending, result);
        ok
    }

    /// `confirmed` is the user's answer to the delete prompt
    pub async fn delete<A: StudentApi + ?Sized>(
        &mut self,
        api: &A,
        id: StudentId,
        confirmed: bool,
    ) -> bool {
        if !confirmed {
            log::debug!("[Dashboard] Delete of {} cancelled", id);
            return false;
        }
        let result = api.delete(id).await;
        let ok = result.is_ok();
        self.finish_delete(id, result);
        ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn make_record(id: StudentId, name: &str, paid: bool) -> StudentRecord {
        StudentRecord {
            id,
            name: name.to_string(),
            room_number: format!("A-{}", id),
            mobile_number: "9876543210".to_string(),
            fee_amount: 1000.0 + id as f64,
            fee_paid: paid,
        }
    }

    fn loaded() -> Dashboard {
        let mut dashboard = Dashboard::default();
        dashboard.begin_load();
        dashboard.finish_load(Ok(vec![
            make_record(1, "Ann Lee", true),
            make_record(2, "Bob Ray", false),
        ]));
        dashboard
    }

    fn fill_valid(dashboard: &mut Dashboard) {
        dashboard.set_form_field(Field::Name, "Jane Doe");
        dashboard.set_form_field(Field::RoomNumber, "A-12");
        dashboard.set_form_field(Field::MobileNumber, "9876543210");
        dashboard.set_form_field(Field::FeeAmount, "1500.50");
        dashboard.set_form_field(Field::FeePaid, "true");
    }

    fn last_message(dashboard: &Dashboard) -> (NotificationKind, String) {
        let n = dashboard.notifications().active().last().unwrap();
        (n.kind, n.message.clone())
    }

    #[test]
    fn test_load_success_replaces_store() {
        let dashboard = loaded();
        assert_eq!(dashboard.load_state(), &LoadState::Loaded);
        assert_eq!(dashboard.students().len(), 2);
        assert_eq!(dashboard.stats(), DashboardStats { total: 2, paid: 1, unpaid: 1 });
        assert_eq!(
            last_message(&dashboard),
            (NotificationKind::Success, "Student data loaded successfully!".to_string())
        );
    }

    #[test]
    fn test_load_failure_sets_banner_and_keeps_store() {
        let mut dashboard = loaded();
        dashboard.begin_load();
        assert!(dashboard.load_state().is_loading());
        dashboard.finish_load(Err(ApiError::Network("connection refused".into())));

        assert_eq!(
            dashboard.load_state().banner(),
            Some("Error: connection refused Please ensure the backend is running.")
        );
        assert_eq!(dashboard.students().len(), 2);
        assert_eq!(last_message(&dashboard).0, NotificationKind::Error);
    }

    #[test]
    fn test_invalid_submit_is_blocked() {
        let mut dashboard = loaded();
        dashboard.set_form_field(Field::Name, "Al");
        assert_eq!(dashboard.begin_submit(), None);
        assert_eq!(
            last_message(&dashboard),
            (NotificationKind::Error, "Please correct the form errors.".to_string())
        );
        assert!(dashboard.form().is_invalid(Field::Name));
        assert!(dashboard.form().is_invalid(Field::FeePaid));
        assert_eq!(dashboard.form().mode(), FormMode::Add);
    }

    #[test]
    fn test_create_flow_in_two_halves() {
        let mut dashboard = loaded();
        fill_valid(&mut dashboard);
        let pending = dashboard.begin_submit().unwrap();
        assert_eq!(pending.action, SubmitAction::Create);

        let created = pending.draft.clone().into_record(3);
        dashboard.finish_submit(&pending, Ok(created.clone()));

        assert_eq!(dashboard.students().all().last(), Some(&created));
        assert_eq!(dashboard.form(), &FormController::default());
    }

    #[test]
    fn test_failed_update_keeps_edit_state() {
        let mut dashboard = loaded();
        assert!(dashboard.begin_edit(2));
        dashboard.set_form_field(Field::FeeAmount, "2000.00");
        let pending = dashboard.begin_submit().unwrap();
        assert_eq!(pending.action, SubmitAction::Update(2));

        let rejected = ApiError::Server {
            status: 500,
            message: "boom".into(),
        };
        dashboard.finish_submit(&pending, Err(rejected));

        assert_eq!(dashboard.form().mode(), FormMode::Edit(2));
        assert_eq!(dashboard.form().value(Field::FeeAmount), "2000.00");
        assert_eq!(dashboard.students().find(2).unwrap().fee_amount, 1002.0);
        assert_eq!(
            last_message(&dashboard),
            (NotificationKind::Error, "Error updating student: Status: 500. boom".to_string())
        );
    }

    #[test]
    fn test_begin_edit_unknown_id_warns() {
        let mut dashboard = loaded();
        assert!(!dashboard.begin_edit(99));
        assert_eq!(dashboard.form().mode(), FormMode::Add);
        assert_eq!(
            last_message(&dashboard),
            (NotificationKind::Warning, "Student not found for editing.".to_string())
        );
    }

    #[test]
    fn test_cancel_edit_returns_to_add() {
        let mut dashboard = loaded();
        dashboard.begin_edit(1);
        dashboard.set_form_field(Field::MobileNumber, "1");
        dashboard.cancel_edit();
        assert_eq!(dashboard.form(), &FormController::default());
    }

    #[test]
    fn test_delete_of_edit_target_keeps_edit_mode() {
        let mut dashboard = loaded();
        dashboard.begin_edit(1);
        dashboard.finish_delete(1, Ok(()));
        assert!(dashboard.students().find(1).is_none());
        assert_eq!(dashboard.form().mode(), FormMode::Edit(1));
        assert_eq!(
            last_message(&dashboard),
            (NotificationKind::Info, "Student deleted successfully!".to_string())
        );
    }

    #[test]
    fn test_delete_failure_leaves_store() {
        let mut dashboard = loaded();
        dashboard.finish_delete(1, Err(ApiError::NotFound { message: "gone".into() }));
        assert_eq!(dashboard.students().len(), 2);
        assert_eq!(
            last_message(&dashboard).1,
            "Error deleting student: Status: 404. gone"
        );
    }

    #[test]
    fn test_view_state_drives_rows() {
        let mut dashboard = loaded();
        dashboard.set_status_filter(StatusFilter::Unpaid);
        let ids: Vec<StudentId> = dashboard.rows().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2]);

        dashboard.set_status_filter(StatusFilter::All);
        dashboard.click_sort(SortColumn::Name);
        dashboard.click_sort(SortColumn::Name);
        let ids: Vec<StudentId> = dashboard.rows().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1]);

        let token = dashboard.type_search("ann");
        dashboard.fire_search(token);
        let ids: Vec<StudentId> = dashboard.rows().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1]);
        // Stats ignore the view
        assert_eq!(dashboard.stats().total, 2);
    }

    fn visible_ids(dashboard: &Dashboard) -> Vec<StudentId> {
        dashboard.rows().iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_search_applies_only_on_last_fire() {
        let mut dashboard = loaded();
        let first = dashboard.type_search("b");
        let second = dashboard.type_search("bo");
        let last = dashboard.type_search("ann");
        assert_eq!(dashboard.search_input(), "ann");
        // Typed text waits for the timer
        assert_eq!(visible_ids(&dashboard), vec![1, 2]);

        assert!(!dashboard.fire_search(first));
        assert!(!dashboard.fire_search(second));
        assert_eq!(dashboard.view().search_text, "");
        assert_eq!(visible_ids(&dashboard), vec![1, 2]);

        assert!(dashboard.fire_search(last));
        assert_eq!(dashboard.view().search_text, "ann");
        assert_eq!(visible_ids(&dashboard), vec![1]);
    }

    #[test]
    fn test_filter_and_sort_apply_while_search_is_pending() {
        let mut dashboard = loaded();
        let pending = dashboard.type_search("zzz");

        dashboard.set_status_filter(StatusFilter::Unpaid);
        assert_eq!(visible_ids(&dashboard), vec![2]);

        dashboard.set_status_filter(StatusFilter::All);
        dashboard.click_sort(SortColumn::FeeAmount);
        dashboard.click_sort(SortColumn::FeeAmount);
        assert_eq!(visible_ids(&dashboard), vec![2, 1]);

        assert!(dashboard.fire_search(pending));
        assert!(visible_ids(&dashboard).is_empty());
    }

    #[test]
    fn test_row_ids_stay_put_when_an_earlier_row_goes() {
        let mut dashboard = loaded();
        let before = dashboard.rows();
        assert_eq!((before[1].id, before[1].index), (2, 2));

        dashboard.finish_delete(1, Ok(()));
        let after = dashboard.rows();
        assert_eq!(after.len(), 1);
        assert_eq!((after[0].id, after[0].index), (2, 1));
        assert_eq!(after[0].name, before[1].name);
    }
}
