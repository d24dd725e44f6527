//! About page: company story, stats, leadership team, certifications, awards.
//!
//! The four lists load concurrently; each section renders independently so
//! a failed list only blanks its own section.

use content::types::{Award, Certification, TeamMember};
use leptos::prelude::*;

use crate::components::notice::ErrorBanner;
use crate::net::api::{gateway, logged};

use super::home::stat_tile;

#[component]
pub fn AboutPage() -> impl IntoView {
    let data = LocalResource::new(|| async {
        let gw = gateway();
        let (stats, team, certifications, awards) =
            futures::join!(gw.home_stats(), gw.team(), gw.certifications(), gw.awards());
        (
            logged("stats", stats),
            logged("team", team),
            logged("certifications", certifications),
            logged("awards", awards),
        )
    });
    let error = Signal::derive(move || {
        data.get().and_then(|(stats, team, certifications, awards)| {
            [stats.failure_text(), team.failure_text(), certifications.failure_text(), awards.failure_text()]
                .into_iter()
                .flatten()
                .next()
        })
    });

    view! {
        <div class="about-page">
            <section class="page-header">
                <h1>"About PeakStart"</h1>
                <p>"Family-founded, safety-first, and building across the region for over two decades."</p>
            </section>
            <ErrorBanner error=error />
            <section class="about-page__stats">
                {move || data.get().and_then(|d| d.0.data).unwrap_or_default().into_iter().map(stat_tile).collect_view()}
            </section>
            <section class="about-page__team">
                <h2>"Meet Our Leadership Team"</h2>
                <div class="card-grid">
                    {move || match data.get() {
                        None => super::loading("team").into_any(),
                        Some(d) => d.1.data.unwrap_or_default().into_iter().map(team_card).collect_view().into_any(),
                    }}
                </div>
            </section>
            <section class="about-page__credentials">
                <div>
                    <h2>"Certifications & Licenses"</h2>
                    <ul>
                        {move || {
                            data.get()
                                .and_then(|d| d.2.data)
                                .unwrap_or_default()
                                .into_iter()
                                .map(|c: Certification| view! { <li>{c.name}</li> })
                                .collect_view()
                        }}
                    </ul>
                </div>
                <div>
                    <h2>"Recent Awards"</h2>
                    <ul>
                        {move || {
                            data.get()
                                .and_then(|d| d.3.data)
                                .unwrap_or_default()
                                .into_iter()
                                .map(|a: Award| view! { <li><strong>{a.year}</strong>" "{a.name}</li> })
                                .collect_view()
                        }}
                    </ul>
                </div>
            </section>
        </div>
    }
}

fn team_card(member: TeamMember) -> impl IntoView {
    view! {
        <article class="card team-card">
            <img class="team-card__image" src=member.image alt=member.name.clone() />
            <h3>{member.name}</h3>
            <p class="team-card__position">{member.position}</p>
            <p class="team-card__experience">{member.experience}</p>
            <p>{member.bio}</p>
        </article>
    }
}
