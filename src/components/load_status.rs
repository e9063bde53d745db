//! Load Status Component
//!
//! Spinner while the list request runs; persistent error banner if it fails.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn LoadStatus() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let loading = Memo::new(move |_| store.dashboard().read().load_state().is_loading());
    let banner = Memo::new(move |_| {
        store
            .dashboard()
            .read()
            .load_state()
            .banner()
            .map(str::to_owned)
    });

    view! {
        <Show when=move || loading.get()>
            <div id="loadingSpinner" class="loading-spinner">
                <i class="fas fa-spinner fa-spin"></i>" Loading students..."
            </div>
        </Show>
        {move || banner.get().map(|text| view! {
            <div id="dataFetchErrorMessage" class="error-banner">
                <span>{text}</span>
                <button type="button" class="btn btn-secondary" on:click=move |_| ctx.reload()>
                    <i class="fas fa-redo"></i>" Retry"
                </button>
            </div>
        })}
    }
}
