//! Portfolio grid filtered by project category.

use content::filters::ProjectQuery;
use content::types::{ALL, PROJECT_CATEGORIES, Project};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::notice::ErrorBanner;
use crate::net::api::{gateway, logged, spawn};
use crate::state::catalog::Listing;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let query = RwSignal::new(ProjectQuery::default());
    let projects = RwSignal::new(Listing::<Project>::default());

    Effect::new(move || {
        let filter = query.get();
        let Some(ticket) = projects.try_update(Listing::begin) else {
            return;
        };
        spawn(async move {
            let resp = logged("projects", gateway().projects(&filter).await);
            projects.update(|listing| {
                listing.finish(ticket, resp);
            });
        });
    });

    let categories = std::iter::once(ALL).chain(PROJECT_CATEGORIES.iter().copied());
    let error = Signal::derive(move || projects.with(|l| l.error().map(str::to_owned)));

    view! {
        <div class="portfolio-page">
            <section class="page-header">
                <h1>"Our Portfolio"</h1>
            </section>
            <div class="filter-bar">
                {categories
                    .map(|category| {
                        let active = move || query.with(|q| q.category == category);
                        view! {
                            <button
                                class="filter-bar__chip"
                                class:filter-bar__chip--active=active
                                on:click=move |_| query.update(|q| q.category = category.to_owned())
                            >
                                {category}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <ErrorBanner error=error />
            <div class="card-grid">
                {move || {
                    let listing = projects.get();
                    if listing.records.is_empty() && listing.error().is_none() {
                        return view! { <p class="page__empty">"No projects in this category yet."</p> }.into_any();
                    }
                    listing.records.into_iter().map(project_card).collect_view().into_any()
                }}
            </div>
        </div>
    }
}

fn project_card(project: Project) -> impl IntoView {
    let href = format!("/portfolio/{}", project.id);
    view! {
        <A href=href attr:class="card project-card">
            <img class="project-card__image" src=project.image alt=project.title.clone() />
            <span class="project-card__category">{project.category}</span>
            <h3>{project.title}</h3>
            <p class="project-card__meta">{format!("{} · {}", project.location, project.completion_date)}</p>
        </A>
    }
}
