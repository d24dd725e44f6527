//! Daily activities tab: CRUD filtered by date, running total, approval.

use content::approval::{activity_prompt, approve_activity};
use content::filters::ActivityQuery;
use content::manager::{Notice, ResourceManager};
use content::types::{DailyActivity, RecordId};
use content::worksite::{activity_total, money};
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
pub fn ActivitiesTab(site_id: RecordId) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let revision = use_context::<Revision>();
    let defaults = FormState::new().with("site_id", site_id.to_string()).with("date", today_text());
    let activities = RwSignal::new(ResourceManager::<DailyActivity>::new().with_defaults(defaults));
    let filter = RwSignal::new(DateFilterForm::default());
    let query = Signal::derive(move || {
        ActivityQuery { site_id: Some(site_id), range: filter.with(|f| f.resolve(today())) }.to_query()
    });

    let notice = RwSignal::new(None::<Notice>);
    let approve = RowAction {
        label: "Approve",
        on_click: Callback::new(move |id: RecordId| {
            let Some(activity) = activities.with(|m| m.record(id).cloned()) else {
                return;
            };
            if !require_session(auth) || !confirm(&activity_prompt(&activity)) {
                return;
            }
            spawn(async move {
                let outcome = approve_activity(&gateway(), &activity).await;
                if let Some(revision) = revision.filter(|_| outcome.is_ok()) {
                    revision.bump();
                }
                notice.set(Some(match outcome {
                    Ok(outcome) => Notice::info(outcome.message()),
                    Err(err) => Notice::error(err.to_string()),
                }));
            });
        }),
    };
    let total = move || activities.with(|m| money(activity_total(m.records())));

    view! {
        <section class="site-tab">
            <h2>"Daily Activities"</h2>
            <DateFilterPicker form=filter />
            <NoticeBanner notice=notice />
            <p class="site-tab__total">"Total: " <strong>{total}</strong></p>
            {resource_panel(activities, query, Some(approve))}
        </section>
    }
}
