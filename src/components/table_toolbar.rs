//! Table Toolbar Component
//!
//! Debounced search box and fee status filter.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use student_core::StatusFilter;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TableToolbar() -> impl IntoView {
    let store = use_app_store();

    // Pending search timer; replacing it drops (and cancels) the previous one
    let search_timer = StoredValue::new_local(None::<Timeout>);

    let on_search = move |ev: web_sys::Event| {
        let token = store.dashboard().write().type_search(event_target_value(&ev));
        let delay = store.dashboard().read_untracked().config().search_debounce_ms;
        search_timer.set_value(Some(Timeout::new(delay, move || {
            store.dashboard().write().fire_search(token);
        })));
    };

    let on_filter = move |ev: web_sys::Event| {
        let filter: StatusFilter = event_target_value(&ev).parse().unwrap_or_default();
        store.dashboard().write().set_status_filter(filter);
    };

    view! {
        <div class="table-controls">
            <div class="search-box">
                <i class="fas fa-search"></i>
                <input
                    type="text"
                    id="searchStudent"
                    placeholder="Search by name, room or mobile..."
                    prop:value=move || store.dashboard().read().search_input().to_string()
                    on:input=on_search
                />
            </div>
            <select
                id="feeStatusFilter"
                prop:value=move || store.dashboard().read().view().status_filter.as_str()
                on:change=on_filter
            >
                {StatusFilter::ALL.iter().map(|filter| view! {
                    <option value=filter.as_str()>{filter.label()}</option>
                }).collect_view()}
            </select>
        </div>
    }
}
