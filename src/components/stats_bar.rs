//! Stats Bar Component
//!
//! Total / paid / unpaid counters over all loaded records.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StatsBar() -> impl IntoView {
    let store = use_app_store();
    let stats = Memo::new(move |_| store.dashboard().read().stats());

    view! {
        <div class="stats-container">
            <div class="stat-card">
                <span class="stat-label">"Total Students"</span>
                <span id="totalStudents" class="stat-value">{move || stats.get().total}</span>
            </div>
            <div class="stat-card paid">
                <span class="stat-label">"Fees Paid"</span>
                <span id="totalPaid" class="stat-value">{move || stats.get().paid}</span>
            </div>
            <div class="stat-card unpaid">
                <span class="stat-label">"Fees Unpaid"</span>
                <span id="totalUnpaid" class="stat-value">{move || stats.get().unpaid}</span>
            </div>
        </div>
    }
}
