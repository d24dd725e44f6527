//! Admin list table for any editable resource.

use content::manager::{ListStatus, ResourceManager};
use content::resource::headings;
use content::types::{Identified, RecordId};
use content::Editable;
use leptos::prelude::*;

/// An extra per-row button, such as "Open" or "Approve".
#[derive(Clone, Copy)]
pub struct RowAction {
    pub label: &'static str,
    pub on_click: Callback<RecordId>,
}

/// Table of the manager's records with Edit/Delete actions per row.
pub fn resource_table<R: Editable>(
    manager: RwSignal<ResourceManager<R>>,
    on_edit: Callback<RecordId>,
    on_delete: Callback<RecordId>,
    extra: Option<RowAction>,
) -> impl IntoView {
    let columns = headings::<R>();
    let column_count = columns.len() + 1;
    let header = columns.into_iter().map(|label| view! { <th>{label}</th> }).collect_view();

    let body = move || {
        let status = manager.with(|m| m.status().clone());
        let rows = manager.with(|m| m.records().to_vec());
        if matches!(status, ListStatus::Idle | ListStatus::Loading) && rows.is_empty() {
            return view! { <tr><td colspan=column_count>"Loading..."</td></tr> }.into_any();
        }
        if let ListStatus::Failed(err) = status {
            return view! { <tr><td colspan=column_count class="resource-table__error">{err}</td></tr> }.into_any();
        }
        if rows.is_empty() {
            let empty = format!("No {} yet.", R::KIND.label().to_lowercase());
            return view! { <tr><td colspan=column_count>{empty}</td></tr> }.into_any();
        }
        rows.into_iter()
            .map(|record| {
                let id = record.id();
                let editing = move || manager.with(|m| m.editing_id() == Some(id));
                let cells = record.cells().into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view();
                view! {
                    <tr class:resource-table__row--editing=editing>
                        {cells}
                        <td class="resource-table__actions">
                            {extra
                                .map(|action| {
                                    view! {
                                        <button class="btn btn--small" on:click=move |_| action.on_click.run(id)>
                                            {action.label}
                                        </button>
                                    }
                                })}
                            <button class="btn btn--small" on:click=move |_| on_edit.run(id)>"Edit"</button>
                            <button class="btn btn--small btn--danger" on:click=move |_| on_delete.run(id)>
                                "Delete"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <table class="resource-table">
            <thead>
                <tr>
                    {header}
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
    }
}
