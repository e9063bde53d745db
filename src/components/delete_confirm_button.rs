//! Delete Confirm Button Component
//!
//! Trash button that asks "Delete?" in place. Nothing is deleted until the
//! user confirms.

use leptos::prelude::*;

/// Two-step delete control for a table row
///
/// # Arguments
/// * `button_class` - CSS class for the trash button
/// * `on_confirm` - Runs once the user confirms
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);

    let prompt = move |answer: bool| {
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            set_asking.set(false);
            if answer {
                on_confirm.run(());
            }
        }
    };

    view! {
        <Show
            when=move || asking.get()
            fallback=move || view! {
                <button
                    class=button_class.clone()
                    title="Delete Student"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(true);
                    }
                >
                    <i class="fas fa-trash-alt"></i>
                </button>
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    title="This action cannot be undone"
                    on:click=prompt(true)
                >
                    "✓"
                </button>
                <button class="cancel-btn" title="Keep this student" on:click=prompt(false)>
                    "✗"
                </button>
            </span>
        </Show>
    }
}
