//! One construction site at `/admin/sites/:id`: summary header and the
//! workers, daily activities and costs tabs.

use content::types::RecordId;
use content::worksite::{SITE_NOT_FOUND, SiteOverview, activity_total, load_site, money};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use super::activities::ActivitiesTab;
use super::costs::CostsTab;
use super::crud::Revision;
use super::workers::WorkersTab;
use crate::net::api::{gateway, spawn};
use crate::state::worksite::{OverviewState, SiteTab};
use crate::util::route::parse_route_id;

#[component]
pub fn AdminSiteDetailPage() -> impl IntoView {
    let params = use_params_map();
    let site_id = Memo::new(move |_| parse_route_id(params.with(|p| p.get("id"))));

    // The header reloads after every mutation made in a tab.
    let revision = Revision::provide();
    let state = RwSignal::new(OverviewState::default());
    Effect::new(move || {
        let id = site_id.get();
        revision.track();
        let Some(ticket) = state.try_update(|s| s.begin(id)) else {
            return;
        };
        spawn(async move {
            let result = match id {
                Some(id) => load_site(&gateway(), id).await,
                None => Err(SITE_NOT_FOUND.to_owned()),
            };
            state.update(|s| {
                s.finish(ticket, result);
            });
        });
    });
    // Tabs stay mounted across header reloads of the same site.
    let loaded = Memo::new(move |_| state.with(OverviewState::site_id));
    let tab = RwSignal::new(SiteTab::default());

    view! {
        <div class="admin-page site-detail">
            <A href="/admin/sites" attr:class="back-link">"← All sites"</A>
            {move || {
                state
                    .with(|s| match &s.overview {
                        None => crate::pages::loading("site").into_any(),
                        Some(Err(err)) => view! { <p class="page__not-found">{err.clone()}</p> }.into_any(),
                        Some(Ok(overview)) => summary(overview.clone()).into_any(),
                    })
            }}
            {move || {
                loaded
                    .get()
                    .map(|id| {
                        view! {
                            <nav class="tabs">
                                {SiteTab::ALL
                                    .into_iter()
                                    .map(|t| {
                                        view! {
                                            <button
                                                class="tabs__tab"
                                                class:tabs__tab--active=move || tab.get() == t
                                                on:click=move |_| tab.set(t)
                                            >
                                                {t.label()}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </nav>
                            {move || tab_body(tab.get(), id)}
                        }
                    })
            }}
        </div>
    }
}

fn tab_body(tab: SiteTab, site_id: RecordId) -> AnyView {
    match tab {
        SiteTab::Workers => view! { <WorkersTab site_id=site_id /> }.into_any(),
        SiteTab::Activities => view! { <ActivitiesTab site_id=site_id /> }.into_any(),
        SiteTab::Costs => view! { <CostsTab site_id=site_id /> }.into_any(),
    }
}

fn summary(overview: SiteOverview) -> impl IntoView {
    let totals = overview.totals();
    let site = overview.site;
    let dates = match &site.end_date {
        Some(end) if !end.is_empty() => format!("{} – {end}", site.start_date),
        _ => format!("Started {}", site.start_date),
    };
    view! {
        <header class="site-detail__header">
            <h1>{site.name}</h1>
            <span class="badge">{site.status}</span>
            <p>{site.location}</p>
            <p>{dates}</p>
            <p>{site.description}</p>
        </header>
        <div class="site-detail__summary">
            <div class="stat-tile">
                <strong>{overview.workers.len()}</strong>
                <span>"Workers"</span>
            </div>
            <div class="stat-tile">
                <strong>{money(activity_total(&overview.activities))}</strong>
                <span>"Activity value"</span>
            </div>
            <div class="stat-tile">
                <strong>{money(totals.total)}</strong>
                <span>"Recorded costs"</span>
            </div>
        </div>
    }
}
