//! Workers tab: worker CRUD, attendance recording, and approval of tallied
//! attendance into labor costs.

use content::approval::{WorkerTally, approve_worker, tally_workers, worker_prompt};
use content::filters::{AttendanceQuery, DateRange, WorkerQuery};
use content::manager::{Notice, ResourceManager};
use content::sequence::RequestSequence;
use content::types::{Attendance, RecordId, Worker};
use content::worksite::money;
use content::FormState;
use leptos::prelude::*;

use super::crud::{Revision, require_session};
use super::resource::resource_panel;
use crate::components::date_filter::DateFilterPicker;
use crate::components::notice::NoticeBanner;
use crate::components::resource_table::RowAction;
use crate::net::api::{gateway, spawn};
use crate::state::auth::AuthState;
use crate::state::worksite::DateFilterForm;
use crate::util::confirm::confirm;
use crate::util::time::{today, today_text};

#[component]
pub fn WorkersTab(site_id: RecordId) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let revision = use_context::<Revision>();
    let workers =
        RwSignal::new(ResourceManager::<Worker>::new().with_defaults(FormState::new().with("site_id", site_id.to_string())));
    let worker_query = Signal::stored(WorkerQuery { site_id: Some(site_id), is_active: None }.to_query());

    let selected = RwSignal::new(None::<RecordId>);
    let attendance =
        RwSignal::new(ResourceManager::<Attendance>::new().with_defaults(FormState::new().with("date", today_text())));
    let attendance_query = Signal::derive(move || {
        AttendanceQuery { worker_id: selected.get(), range: DateRange::default() }.to_query()
    });
    let show_attendance = RowAction {
        label: "Attendance",
        on_click: Callback::new(move |id: RecordId| {
            selected.set(Some(id));
            attendance.update(|m| m.set_default("worker_id", id.to_string()));
        }),
    };

    // Tallies follow the roster, recorded attendance, and the date filter.
    let filter = RwSignal::new(DateFilterForm::default());
    let roster = Memo::new(move |_| workers.with(|m| m.records().to_vec()));
    let recorded = Memo::new(move |_| attendance.with(|m| m.records().len()));
    let tallies = RwSignal::new(Vec::<WorkerTally>::new());
    let sequence = RwSignal::new(RequestSequence::new());
    Effect::new(move || {
        let range = filter.with(|f| f.resolve(today()));
        let list = roster.get();
        recorded.track();
        let Some(ticket) = sequence.try_update(RequestSequence::issue) else {
            return;
        };
        spawn(async move {
            let result = tally_workers(&gateway(), &list, &range).await;
            if sequence.with_untracked(|s| s.is_current(ticket)) {
                tallies.set(result);
            }
        });
    });

    let notice = RwSignal::new(None::<Notice>);
    let approve = move |tally: WorkerTally| {
        if !require_session(auth) || !confirm(&worker_prompt(&tally)) {
            return;
        }
        spawn(async move {
            let outcome = approve_worker(&gateway(), &tally, &today_text()).await;
            if let Some(revision) = revision.filter(|_| outcome.is_ok()) {
                revision.bump();
            }
            notice.set(Some(match outcome {
                Ok(outcome) => Notice::info(outcome.message()),
                Err(err) => Notice::error(err.to_string()),
            }));
        });
    };

    view! {
        <section class="site-tab">
            <h2>"Workers"</h2>
            {resource_panel(workers, worker_query, Some(show_attendance))}

            {move || {
                selected.get().map(|worker_id| {
                    let name = workers
                        .with(|m| m.record(worker_id).map(|w| w.name.clone()))
                        .unwrap_or_else(|| format!("worker #{worker_id}"));
                    view! {
                        <div class="site-tab__attendance">
                            <h3>{format!("Attendance for {name}")}</h3>
                            <button class="btn btn--small" on:click=move |_| selected.set(None)>"Close"</button>
                            {resource_panel(attendance, attendance_query, None)}
                        </div>
                    }
                })
            }}

            <h2>"Work to approve"</h2>
            <DateFilterPicker form=filter />
            <NoticeBanner notice=notice />
            <table class="resource-table">
                <thead>
                    <tr>
                        <th>"Worker"</th>
                        <th>"Days"</th>
                        <th>"Hours"</th>
                        <th>"Daily Price"</th>
                        <th>"Total"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        tallies
                            .get()
                            .into_iter()
                            .map(|tally| {
                                let row = tally.clone();
                                let idle = tally.total_days == 0;
                                view! {
                                    <tr>
                                        <td>{tally.name}</td>
                                        <td>{tally.total_days}</td>
                                        <td>{format!("{:.1}", tally.total_hours)}</td>
                                        <td>{money(tally.daily_price)}</td>
                                        <td>{money(tally.total_cost)}</td>
                                        <td>
                                            <button
                                                class="btn btn--small"
                                                disabled=idle
                                                on:click=move |_| approve(row.clone())
                                            >
                                                "Approve"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </section>
    }
}
