//! Contact submissions inbox with a detail modal.
//!
//! Submissions are created by the public contact form, so this screen has
//! no edit form: list, open, delete. Deleting the submission that is open in
//! the modal closes it.

use content::filters::Query;
use content::types::{ContactSubmission, RecordId};
use leptos::prelude::*;

use super::crud::require_session;
use crate::components::modal::Modal;
use crate::components::notice::NoticeBanner;
use crate::net::api::{gateway, logged, spawn};
use crate::state::auth::AuthState;
use crate::state::submissions::{SubmissionsState, status_label};
use crate::util::confirm::confirm;

fn reload(state: RwSignal<SubmissionsState>) {
    let Some(ticket) = state.try_update(|s| s.list.begin_load()) else {
        return;
    };
    spawn(async move {
        let resp = logged("contact submissions", gateway().list::<ContactSubmission>(&Query::new()).await);
        state.update(|s| {
            s.list.finish_load(ticket, resp);
        });
    });
}

#[component]
pub fn AdminSubmissionsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = RwSignal::new(SubmissionsState::default());
    reload(state);

    let on_delete = Callback::new(move |id: RecordId| {
        let name = state.with(|s| s.list.record(id).map(ContactSubmission::full_name)).unwrap_or_default();
        if !confirm(&format!("Delete the submission from {name}?")) || !require_session(auth) {
            return;
        }
        spawn(async move {
            let resp = logged("delete submission", gateway().delete::<ContactSubmission>(id).await);
            let succeeded = resp.success;
            state.update(|s| {
                s.apply_delete(id, &resp);
            });
            if succeeded {
                reload(state);
            }
        });
    });
    let on_close = Callback::new(move |()| state.update(SubmissionsState::close));

    let rows = move || {
        state.with(|s| s.list.records().to_vec()).into_iter().map(|submission| {
            let id = submission.id;
            view! {
                <tr>
                    <td>{submission.full_name()}</td>
                    <td>{submission.email.clone()}</td>
                    <td>{submission.project_type.clone().unwrap_or_default()}</td>
                    <td>{submission.created_at.clone().unwrap_or_default()}</td>
                    <td>
                        <span class="badge">{status_label(&submission).to_owned()}</span>
                    </td>
                    <td class="resource-table__actions">
                        <button class="btn btn--small" on:click=move |_| state.update(|s| s.open(id))>"View"</button>
                        <button class="btn btn--small btn--danger" on:click=move |_| on_delete.run(id)>"Delete"</button>
                    </td>
                </tr>
            }
        }).collect_view()
    };

    view! {
        <div class="admin-page">
            <h1>"Contact Submissions"</h1>
            <NoticeBanner notice=Signal::derive(move || state.with(|s| s.list.notice().cloned())) />
            <table class="resource-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Project Type"</th>
                        <th>"Received"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            {move || {
                state.with(|s| s.selected_record().cloned()).map(|submission| {
                    let id = submission.id;
                    view! {
                        <Modal title=submission.full_name() on_close=on_close>
                            <dl class="submission-detail">
                                <dt>"Email"</dt>
                                <dd>{submission.email.clone()}</dd>
                                <dt>"Phone"</dt>
                                <dd>{submission.phone.clone().unwrap_or_else(|| "-".to_owned())}</dd>
                                <dt>"Project Type"</dt>
                                <dd>{submission.project_type.clone().unwrap_or_else(|| "-".to_owned())}</dd>
                                <dt>"Budget"</dt>
                                <dd>{submission.budget.clone().unwrap_or_else(|| "-".to_owned())}</dd>
                                <dt>"Message"</dt>
                                <dd class="submission-detail__message">{submission.message.clone()}</dd>
                            </dl>
                            <button class="btn btn--danger" on:click=move |_| on_delete.run(id)>"Delete"</button>
                        </Modal>
                    }
                })
            }}
        </div>
    }
}
