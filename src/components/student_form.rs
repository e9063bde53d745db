//! Student Form Component
//!
//! Add/Edit form. Inputs write straight into the dashboard's form state,
//! which re-checks the field on every keystroke.

use leptos::prelude::*;
use student_core::Field;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::store::{store_submit, use_app_store, AppStateStoreFields};

const FORM_SECTION_ID: &str = "student-management-section";

/// Fee status options: (select value, label). "" is the unset default.
const FEE_STATUS_OPTIONS: &[(&str, &str)] = &[
    ("", "Select status"),
    ("true", "Paid"),
    ("false", "Unpaid"),
];

/// Bring the form into view and focus the first input (after an edit click)
pub fn scroll_to_form() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(section) = document.get_element_by_id(FORM_SECTION_ID) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        section.scroll_into_view_with_scroll_into_view_options(&options);
    }
    if let Some(input) = document
        .get_element_by_id(Field::Name.input_id())
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = input.focus();
    }
}

/// Label, input and error line for one text field
#[component]
fn FormInput(
    field: Field,
    #[prop(into)] input_type: String,
    #[prop(into)] placeholder: String,
    #[prop(optional, into)] step: Option<String>,
) -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="form-group">
            <label for=field.input_id()>{field.label()}</label>
            <input
                id=field.input_id()
                type=input_type
                placeholder=placeholder
                step=step
                class=move || if store.dashboard().read().form().is_invalid(field) { "invalid" } else { "" }
                prop:value=move || store.dashboard().read().form().value(field).to_string()
                on:input=move |ev| {
                    store.dashboard().write().set_form_field(field, event_target_value(&ev));
                }
            />
            <div class="error-message" id=format!("{}-error", field.input_id())>
                {move || store.dashboard().read().form().error(field).unwrap_or_default().to_string()}
            </div>
        </div>
    }
}

#[component]
fn FeeStatusSelect() -> impl IntoView {
    let store = use_app_store();
    let field = Field::FeePaid;

    view! {
        <div class="form-group">
            <label for=field.input_id()>{field.label()}</label>
            <select
                id=field.input_id()
                class=move || if store.dashboard().read().form().is_invalid(field) { "invalid" } else { "" }
                prop:value=move || store.dashboard().read().form().value(field).to_string()
                on:change=move |ev| {
                    store.dashboard().write().set_form_field(field, event_target_value(&ev));
                }
            >
                {FEE_STATUS_OPTIONS.iter().map(|(value, label)| view! {
                    <option value=*value>{*label}</option>
                }).collect_view()}
            </select>
            <div class="error-message" id=format!("{}-error", field.input_id())>
                {move || store.dashboard().read().form().error(field).unwrap_or_default().to_string()}
            </div>
        </div>
    }
}

/// Form for adding a student or editing the selected one
#[component]
pub fn StudentForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let editing = Memo::new(move |_| store.dashboard().read().form().editing_id().is_some());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_submit(store, ctx.api());
    };

    view! {
        <section id=FORM_SECTION_ID class="form-section">
            <h2>{move || if editing.get() { "Edit Student" } else { "Add Student" }}</h2>
            <form id="studentForm" novalidate=true on:submit=on_submit>
                <FormInput field=Field::Name input_type="text" placeholder="Full name" />
                <FormInput field=Field::RoomNumber input_type="text" placeholder="e.g. A-12" />
                <FormInput field=Field::MobileNumber input_type="tel" placeholder="10-digit mobile" />
                <FormInput field=Field::FeeAmount input_type="number" placeholder="Amount" step="0.01" />
                <FeeStatusSelect />

                <div class="form-actions">
                    <button
                        type="submit"
                        id="submitBtn"
                        class=move || format!("btn {}", store.dashboard().read().form().submit_class())
                    >
                        <i class="fas fa-save"></i>
                        " "
                        {move || store.dashboard().read().form().submit_label()}
                    </button>
                    <Show when=move || editing.get()>
                        <button
                            type="button"
                            id="cancelEditBtn"
                            class="btn btn-secondary"
                            on:click=move |_| store.dashboard().write().cancel_edit()
                        >
                            <i class="fas fa-times"></i>" Cancel"
                        </button>
                    </Show>
                </div>
            </form>
        </section>
    }
}
