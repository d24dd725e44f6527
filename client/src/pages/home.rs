//! Landing page: hero, featured services, company stats, testimonials.

use content::types::{CompanyStat, Service, Testimonial};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::notice::ErrorBanner;
use crate::net::api::{gateway, logged};
use crate::util::icons::icon_for;

#[component]
pub fn HomePage() -> impl IntoView {
    let data = LocalResource::new(|| async {
        let gw = gateway();
        let (services, stats, testimonials) = futures::join!(gw.home_services(), gw.home_stats(), gw.home_testimonials());
        (
            logged("home services", services),
            logged("home stats", stats),
            logged("home testimonials", testimonials),
        )
    });

    let error = Signal::derive(move || {
        data.get().and_then(|(services, stats, testimonials)| {
            [services.success, stats.success, testimonials.success]
                .contains(&false)
                .then(|| "Some content could not be loaded.".to_owned())
        })
    });

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Building Tomorrow's Landmarks Today"</h1>
                <p>"Commercial, residential and industrial construction with a record of quality and safety."</p>
                <div class="hero__actions">
                    <A href="/contact" attr:class="btn btn--primary">"Get a Free Quote"</A>
                    <A href="/portfolio" attr:class="btn">"View Our Work"</A>
                </div>
            </section>
            <ErrorBanner error=error />
            <section class="home-page__services">
                <h2>"Our Services"</h2>
                <div class="card-grid">
                    {move || match data.get() {
                        None => super::loading("services").into_any(),
                        Some((services, _, _)) => {
                            services.data.unwrap_or_default().into_iter().map(service_card).collect_view().into_any()
                        }
                    }}
                </div>
                <A href="/services" attr:class="btn">"All Services"</A>
            </section>
            <section class="home-page__stats">
                {move || {
                    data.get()
                        .and_then(|(_, stats, _)| stats.data)
                        .unwrap_or_default()
                        .into_iter()
                        .map(stat_tile)
                        .collect_view()
                }}
            </section>
            <section class="home-page__testimonials">
                <h2>"What Our Clients Say"</h2>
                <div class="card-grid">
                    {move || {
                        data.get()
                            .and_then(|(_, _, testimonials)| testimonials.data)
                            .unwrap_or_default()
                            .into_iter()
                            .map(testimonial_card)
                            .collect_view()
                    }}
                </div>
            </section>
            <section class="cta">
                <h2>"Ready to Start Your Project?"</h2>
                <A href="/contact" attr:class="btn btn--primary">"Contact Us"</A>
            </section>
        </div>
    }
}

fn service_card(service: Service) -> impl IntoView {
    view! {
        <article class="card service-card">
            <span class="service-card__icon">{icon_for(service.icon_name.as_deref())}</span>
            <h3>{service.title}</h3>
            <p>{service.description}</p>
        </article>
    }
}

pub(crate) fn stat_tile(stat: CompanyStat) -> impl IntoView {
    view! {
        <div class="stat-tile">
            <span class="stat-tile__icon">{icon_for(stat.icon_name.as_deref())}</span>
            <strong class="stat-tile__number">{stat.number}</strong>
            <span class="stat-tile__label">{stat.label}</span>
        </div>
    }
}

fn testimonial_card(testimonial: Testimonial) -> impl IntoView {
    let image = (!testimonial.image.is_empty())
        .then(|| view! { <img class="testimonial-card__image" src=testimonial.image alt="" /> });
    view! {
        <blockquote class="card testimonial-card">
            {image}
            <p>{format!("\u{201C}{}\u{201D}", testimonial.text)}</p>
            <footer>
                <strong>{testimonial.name}</strong>
                <span>{testimonial.company}</span>
            </footer>
        </blockquote>
    }
}
