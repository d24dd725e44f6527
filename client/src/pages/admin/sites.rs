//! Construction sites list with status and date filters.

use content::filters::SiteQuery;
use content::types::{ALL, SITE_STATUSES, Site};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::resource::{ScreenConfig, resource_screen};
use crate::components::resource_table::RowAction;

#[component]
pub fn AdminSitesPage() -> impl IntoView {
    let navigate = use_navigate();
    let filter = RwSignal::new(SiteQuery::default());
    let open = RowAction {
        label: "Open",
        on_click: Callback::new(move |id| navigate(&format!("/admin/sites/{id}"), NavigateOptions::default())),
    };
    let config = ScreenConfig {
        query: Some(Signal::derive(move || filter.with(SiteQuery::to_query))),
        extra: Some(open),
        ..ScreenConfig::default()
    };

    view! {
        <div class="admin-page">
            <h1>"Construction Sites"</h1>
            <div class="filter-bar">
                <select
                    prop:value=move || filter.with(|f| f.status.clone())
                    on:change=move |ev| filter.update(|f| f.status = event_target_value(&ev))
                >
                    <option value=ALL>"All statuses"</option>
                    {SITE_STATUSES.iter().map(|s| view! { <option value=*s>{*s}</option> }).collect_view()}
                </select>
                <label>
                    "From "
                    <input
                        type="date"
                        prop:value=move || filter.with(|f| f.start_date.clone())
                        on:change=move |ev| filter.update(|f| f.start_date = event_target_value(&ev))
                    />
                </label>
                <label>
                    "To "
                    <input
                        type="date"
                        prop:value=move || filter.with(|f| f.end_date.clone())
                        on:change=move |ev| filter.update(|f| f.end_date = event_target_value(&ev))
                    />
                </label>
            </div>
            {resource_screen::<Site>(config)}
        </div>
    }
}
