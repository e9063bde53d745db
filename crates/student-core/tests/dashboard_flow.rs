//! Dashboard Flow Tests
//!
//! Drives the controller end to end against an in-memory backend.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use student_core::{
    ApiError, ApiResult, Dashboard, DashboardStats, Field, FormController, FormMode,
    NotificationKind, StudentApi, StudentDraft, StudentId, StudentRecord,
};

/// Backend double: assigns ids, can be told to fail the next call
#[derive(Default)]
struct FakeApi {
    rows: RefCell<Vec<StudentRecord>>,
    next_id: Cell<StudentId>,
    fail_next: RefCell<Option<ApiError>>,
    calls: Cell<usize>,
}

impl FakeApi {
    fn with_rows(rows: Vec<StudentRecord>) -> Self {
        let next = rows.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Self {
            rows: RefCell::new(rows),
            next_id: Cell::new(next),
            ..Default::default()
        }
    }

    fn fail_with(&self, err: ApiError) {
        *self.fail_next.borrow_mut() = Some(err);
    }

    fn check(&self) -> ApiResult<()> {
        self.calls.set(self.calls.get() + 1);
        match self.fail_next.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl StudentApi for FakeApi {
    async fn list(&self) -> ApiResult<Vec<StudentRecord>> {
        self.check()?;
        Ok(self.rows.borrow().clone())
    }

    async fn create(&self, draft: &StudentDraft) -> ApiResult<StudentRecord> {
        self.check()?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let record = draft.clone().into_record(id);
        self.rows.borrow_mut().push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: StudentId, draft: &StudentDraft) -> ApiResult<StudentRecord> {
        self.check()?;
        let mut rows = self.rows.borrow_mut();
        let slot = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ApiError::NotFound {
                message: format!("no student {}", id),
            })?;
        *slot = draft.clone().into_record(id);
        Ok(slot.clone())
    }

    async fn delete(&self, id: StudentId) -> ApiResult<()> {
        self.check()?;
        self.rows.borrow_mut().retain(|r| r.id != id);
        Ok(())
    }
}

fn make_record(id: StudentId, name: &str, paid: bool) -> StudentRecord {
    StudentRecord {
        id,
        name: name.to_string(),
        room_number: format!("B-{}", id),
        mobile_number: format!("90000000{:02}", id),
        fee_amount: 500.0 * id as f64,
        fee_paid: paid,
    }
}

fn five_rows() -> Vec<StudentRecord> {
    vec![
        make_record(1, "Asha", true),
        make_record(2, "Ravi", false),
        make_record(3, "Meena", true),
        make_record(4, "Kiran", true),
        make_record(5, "Dev", false),
    ]
}

async fn loaded(api: &FakeApi) -> Dashboard {
    let mut dashboard = Dashboard::default();
    dashboard.load(api).await;
    dashboard
}

#[tokio::test]
async fn test_initial_load_and_stats() {
    let api = FakeApi::with_rows(five_rows());
    let dashboard = loaded(&api).await;

    assert_eq!(dashboard.stats(), DashboardStats { total: 5, paid: 3, unpaid: 2 });
    assert_eq!(dashboard.rows().len(), 5);
    assert!(dashboard.load_state().banner().is_none());
}

#[tokio::test]
async fn test_initial_load_failure_shows_banner() {
    let api = FakeApi::with_rows(five_rows());
    api.fail_with(ApiError::Network("error sending request".into()));
    let dashboard = loaded(&api).await;

    assert!(dashboard.rows().is_empty());
    assert_eq!(dashboard.stats(), DashboardStats::default());
    assert_eq!(
        dashboard.load_state().banner(),
        Some("Error: error sending request Please ensure the backend is running.")
    );
}

#[tokio::test]
async fn test_add_round_trip() {
    let api = FakeApi::with_rows(five_rows());
    let mut dashboard = loaded(&api).await;

    dashboard.set_form_field(Field::Name, "Jane Doe");
    dashboard.set_form_field(Field::RoomNumber, "A-12");
    dashboard.set_form_field(Field::MobileNumber, "9876543210");
    dashboard.set_form_field(Field::FeeAmount, "1500.50");
    dashboard.set_form_field(Field::FeePaid, "true");

    assert!(dashboard.submit(&api).await);

    let added: Vec<&StudentRecord> = dashboard
        .students()
        .all()
        .iter()
        .filter(|r| r.name == "Jane Doe")
        .collect();
    assert_eq!(added.len(), 1);
    assert_eq!(
        added[0],
        &StudentRecord {
            id: 6,
            name: "Jane Doe".into(),
            room_number: "A-12".into(),
            mobile_number: "9876543210".into(),
            fee_amount: 1500.5,
            fee_paid: true,
        }
    );
    assert_eq!(dashboard.form(), &FormController::default());
    assert_eq!(dashboard.stats().total, 6);
}

#[tokio::test]
async fn test_edit_round_trip_changes_only_fee() {
    let api = FakeApi::with_rows(five_rows());
    let mut dashboard = loaded(&api).await;
    let before = dashboard.students().find(3).cloned().unwrap();

    assert!(dashboard.begin_edit(3));
    dashboard.set_form_field(Field::FeeAmount, "2000.00");
    assert!(dashboard.submit(&api).await);

    let after = dashboard.students().find(3).cloned().unwrap();
    assert_eq!(after, StudentRecord { fee_amount: 2000.0, ..before });
    assert_eq!(dashboard.students().len(), 5);
    assert_eq!(dashboard.form().mode(), FormMode::Add);
}

#[tokio::test]
async fn test_invalid_form_never_reaches_backend() {
    let api = FakeApi::with_rows(five_rows());
    let mut dashboard = loaded(&api).await;
    let calls = api.calls.get();

    dashboard.set_form_field(Field::Name, "Jo");
    assert!(!dashboard.submit(&api).await);
    assert_eq!(api.calls.get(), calls);
    assert_eq!(dashboard.students().len(), 5);
}

#[tokio::test]
async fn test_server_rejection_keeps_form() {
    let api = FakeApi::with_rows(five_rows());
    let mut dashboard = loaded(&api).await;
    dashboard.set_form_field(Field::Name, "Jane Doe");
    dashboard.set_form_field(Field::RoomNumber, "A-12");
    dashboard.set_form_field(Field::MobileNumber, "9876543210");
    dashboard.set_form_field(Field::FeeAmount, "10");
    dashboard.set_form_field(Field::FeePaid, "false");
    let typed = dashboard.form().clone();

    api.fail_with(ApiError::Server {
        status: 400,
        message: "Duplicate mobile number".into(),
    });
    assert!(!dashboard.submit(&api).await);

    assert_eq!(dashboard.form(), &typed);
    assert_eq!(dashboard.students().len(), 5);
    let toast = dashboard.notifications().active().last().unwrap();
    assert_eq!(toast.kind, NotificationKind::Error);
    assert_eq!(toast.message, "Error adding student: Status: 400. Duplicate mobile number");
}

#[tokio::test]
async fn test_delete_confirmation() {
    let api = FakeApi::with_rows(five_rows());
    let mut dashboard = loaded(&api).await;
    let rows_before = dashboard.rows();

    assert!(!dashboard.delete(&api, 2, false).await);
    assert_eq!(dashboard.rows(), rows_before);

    assert!(dashboard.delete(&api, 2, true).await);
    assert!(dashboard.students().find(2).is_none());
    assert_eq!(dashboard.stats(), DashboardStats { total: 4, paid: 3, unpaid: 1 });
}

#[tokio::test]
async fn test_update_after_deleting_edit_target_reports_not_found() {
    let api = FakeApi::with_rows(five_rows());
    let mut dashboard = loaded(&api).await;

    assert!(dashboard.begin_edit(4));
    assert!(dashboard.delete(&api, 4, true).await);
    assert_eq!(dashboard.form().mode(), FormMode::Edit(4));

    assert!(!dashboard.submit(&api).await);
    let toast = dashboard.notifications().active().last().unwrap();
    assert_eq!(toast.message, "Error updating student: Status: 404. no student 4");
    assert_eq!(dashboard.students().len(), 4);
}

#[tokio::test]
async fn test_overlapping_creates_both_land() {
    let api = FakeApi::with_rows(Vec::new());
    let mut dashboard = loaded(&api).await;

    let fill = |dashboard: &mut Dashboard, name: &str| {
        dashboard.set_form_field(Field::Name, name);
        dashboard.set_form_field(Field::RoomNumber, "C-1");
        dashboard.set_form_field(Field::MobileNumber, "9999999999");
        dashboard.set_form_field(Field::FeeAmount, "0.01");
        dashboard.set_form_field(Field::FeePaid, "false");
    };

    // Two submits issued before either response is applied
    fill(&mut dashboard, "First One");
    let first = dashboard.begin_submit().unwrap();
    fill(&mut dashboard, "Second One");
    let second = dashboard.begin_submit().unwrap();

    let second_result = second.send(&api).await;
    let first_result = first.send(&api).await;
    dashboard.finish_submit(&second, second_result);
    dashboard.finish_submit(&first, first_result);

    let names: Vec<&str> = dashboard
        .students()
        .all()
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, vec!["Second One", "First One"]);
}
