//! Global Application State Store
//!
//! Uses Leptos reactive_stores; the dashboard controller lives in one field
//! so every derived view re-runs when it changes.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use student_core::{Dashboard, DashboardConfig, NotificationId, StudentApi, StudentId};

use crate::commands::HttpStudentApi;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Records, view state, form, toasts and load status
    pub dashboard: Dashboard,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            dashboard: Dashboard::new(config),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Fetch the full list, replacing the table on success
pub fn store_load(store: AppStore, api: HttpStudentApi) {
    store.dashboard().write().begin_load();
    spawn_local(async move {
        let result = api.list().await;
        store.dashboard().write().finish_load(result);
    });
}

/// Validate the form and send it; nothing is sent if a field is invalid
pub fn store_submit(store: AppStore, api: HttpStudentApi) {
    let pending = store.dashboard().write().begin_submit();
    let Some(pending) = pending else {
        return;
    };
    spawn_local(async move {
        let result = pending.send(&api).await;
        store.dashboard().write().finish_submit(&pending, result);
    });
}

/// Delete a confirmed row
pub fn store_delete(store: AppStore, api: HttpStudentApi, id: StudentId) {
    spawn_local(async move {
        let result = api.delete(id).await;
        store.dashboard().write().finish_delete(id, result);
    });
}

/// Drop a toast once its display time is up
pub fn store_dismiss_after(store: AppStore, id: NotificationId, duration_ms: u32) {
    spawn_local(async move {
        TimeoutFuture::new(duration_ms).await;
        store.dashboard().write().dismiss_notification(id);
    });
}
