//! Student Fee Dashboard App
//!
//! Main application component: stats, form, then the records table.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::HttpStudentApi;
use crate::components::{
    LoadStatus, StatsBar, StudentForm, StudentTable, TableToolbar, ToastContainer,
};
use crate::config::load_config;
use crate::context::AppContext;
use crate::store::{store_load, AppState};

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let api = HttpStudentApi::new(&config);

    // State
    let store = Store::new(AppState::new(config));
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), api);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load students on mount and whenever a reload is requested
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        log::debug!("[APP] Loading students, trigger={}", trigger);
        store_load(store, ctx.api());
    });

    view! {
        <div class="container">
            <header class="app-header">
                <h1><i class="fas fa-building"></i>" PG Student Fee Management"</h1>
            </header>

            <StatsBar />

            <StudentForm />

            <section class="table-section">
                <h2>"Student Records"</h2>
                <TableToolbar />
                <LoadStatus />
                <StudentTable />
            </section>

            <ToastContainer />
        </div>
    }
}
