//! Toast Container Component
//!
//! Renders active notifications; each one dismisses itself after its duration.

use leptos::prelude::*;
use student_core::Notification;

use crate::store::{store_dismiss_after, use_app_store, AppStateStoreFields};

#[component]
pub fn ToastContainer() -> impl IntoView {
    let store = use_app_store();
    let toasts = Memo::new(move |_| store.dashboard().read().notifications().active().to_vec());

    view! {
        <div id="toast-container">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| view! { <Toast notification=toast /> }
            />
        </div>
    }
}

#[component]
fn Toast(notification: Notification) -> impl IntoView {
    let store = use_app_store();
    store_dismiss_after(store, notification.id, notification.duration_ms);

    view! {
        <div class=format!("toast {} show", notification.kind.class_name())>
            <i class=notification.kind.icon()></i>
            " "
            <span>{notification.message}</span>
        </div>
    }
}
