//! Student Table Component
//!
//! Sortable table over the dashboard's projected rows, with an empty state.

use leptos::prelude::*;
use student_core::{SortColumn, SortState, StudentId, ViewRow};

use crate::components::{scroll_to_form, DeleteConfirmButton};
use crate::context::use_app_context;
use crate::store::{store_delete, use_app_store, AppStateStoreFields};

/// Clickable column header showing the sort direction
#[component]
fn SortHeader(column: SortColumn, sort: Memo<SortState>) -> impl IntoView {
    let store = use_app_store();

    view! {
        <th
            data-sort=column.field_name()
            class=move || sort.get().header_class(column)
            on:click=move |_| store.dashboard().write().click_sort(column)
        >
            {column.label()}
            " "
            <i class=move || sort.get().header_icon(column)></i>
        </th>
    }
}

/// One table row, keyed by student id. Its cells track the projected row,
/// so a re-index after another row's delete keeps this row's local state.
#[component]
fn StudentRow(id: StudentId, rows: Memo<Vec<ViewRow>>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let row = Memo::new(move |_| {
        rows.with(|rows| rows.iter().find(|r| r.id == id).cloned())
            .unwrap_or_default()
    });

    let on_edit = move |_: web_sys::MouseEvent| {
        let found = store.dashboard().write().begin_edit(id);
        if found {
            scroll_to_form();
        }
    };

    let api = ctx.api();
    let on_delete = Callback::new(move |_: ()| {
        log::debug!("[Table] Delete confirmed for student {}", id);
        store_delete(store, api.clone(), id);
    });

    view! {
        <tr>
            <td data-label="Sr. No.">{move || row.with(|r| r.index)}</td>
            <td data-label="Name">{move || row.with(|r| r.name.clone())}</td>
            <td data-label="Room No">{move || row.with(|r| r.room_number.clone())}</td>
            <td data-label="Mobile No">{move || row.with(|r| r.mobile_number.clone())}</td>
            <td data-label="Fee Amount">{move || row.with(|r| r.fee_display.clone())}</td>
            <td data-label="Fee Status">
                <span class=move || row.with(|r| r.badge_class())>
                    {move || row.with(|r| r.badge_label())}
                </span>
            </td>
            <td data-label="Actions" class="actions">
                <button class="edit-btn" title="Edit Student" on:click=on_edit>
                    <i class="fas fa-edit"></i>
                </button>
                <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete />
            </td>
        </tr>
    }
}

#[component]
pub fn StudentTable() -> impl IntoView {
    let store = use_app_store();
    let rows = Memo::new(move |_| store.dashboard().read().rows());
    let sort = Memo::new(move |_| store.dashboard().read().view().sort);

    view! {
        <Show
            when=move || !rows.get().is_empty()
            fallback=|| view! {
                <p id="noRecordsMessage" class="no-records">"No student records found."</p>
            }
        >
            <table id="studentTable">
                <thead>
                    <tr>
                        <th>"Sr. No."</th>
                        {SortColumn::ALL.into_iter().map(|column| view! {
                            <SortHeader column=column sort=sort />
                        }).collect_view()}
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody id="studentBody">
                    <For
                        each=move || rows.get()
                        key=|row| row.id
                        children=move |row| view! { <StudentRow id=row.id rows=rows /> }
                    />
                </tbody>
            </table>
        </Show>
    }
}
