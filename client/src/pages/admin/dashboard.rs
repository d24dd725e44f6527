//! Admin landing page with one count card per content kind.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api::gateway;
use crate::state::dashboard::load_counts;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let counts = LocalResource::new(|| async { load_counts(&gateway()).await });

    view! {
        <div class="admin-dashboard">
            <h1>"Dashboard"</h1>
            <div class="admin-dashboard__cards">
                {move || match counts.get() {
                    None => crate::pages::loading("counts").into_any(),
                    Some(counts) => {
                        counts
                            .cards()
                            .into_iter()
                            .map(|(label, count, href)| {
                                view! {
                                    <A href=href attr:class="card admin-dashboard__card">
                                        <strong class="admin-dashboard__count">{count}</strong>
                                        <span>{label}</span>
                                    </A>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
