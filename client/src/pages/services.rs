//! Services catalogue with icons and feature lists.

use content::types::Service;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::notice::ErrorBanner;
use crate::net::api::{gateway, logged};
use crate::util::icons::icon_for;

const PROCESS: &[(&str, &str)] = &[
    ("Consultation", "We review your goals, site and budget."),
    ("Planning", "Design, permits and a fixed schedule."),
    ("Construction", "Daily supervision and clear reporting."),
    ("Handover", "Final inspection and warranty walkthrough."),
];

#[component]
pub fn ServicesPage() -> impl IntoView {
    let services = LocalResource::new(|| async { logged("services", gateway().services().await) });
    let error = Signal::derive(move || services.get().and_then(|r| r.failure_text()));

    view! {
        <div class="services-page">
            <section class="page-header">
                <h1>"Our Services"</h1>
                <p>"From ground-up builds to renovations, one team from plan to handover."</p>
            </section>
            <ErrorBanner error=error />
            <div class="card-grid">
                {move || match services.get() {
                    None => super::loading("services").into_any(),
                    Some(resp) => resp.data.unwrap_or_default().into_iter().map(service_detail).collect_view().into_any(),
                }}
            </div>
            <section class="services-page__process">
                <h2>"Our Process"</h2>
                <ol>
                    {PROCESS
                        .iter()
                        .map(|(step, detail)| view! { <li><strong>{*step}</strong>" "{*detail}</li> })
                        .collect_view()}
                </ol>
            </section>
            <section class="cta">
                <h2>"Ready to Start Your Project?"</h2>
                <A href="/contact" attr:class="btn btn--primary">"Get Consultation"</A>
            </section>
        </div>
    }
}

fn service_detail(service: Service) -> impl IntoView {
    view! {
        <article class="card service-card service-card--detail">
            <span class="service-card__icon">{icon_for(service.icon_name.as_deref())}</span>
            <h2>{service.title}</h2>
            <p>{service.description}</p>
            <ul class="service-card__features">
                {service.features.into_iter().map(|feature| view! { <li>{feature}</li> }).collect_view()}
            </ul>
        </article>
    }
}
