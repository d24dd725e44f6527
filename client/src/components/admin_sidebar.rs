//! Back-office navigation.

use leptos::prelude::*;
use leptos_router::components::A;

/// `(path, label)` for every admin screen, in sidebar order.
pub const ADMIN_LINKS: &[(&str, &str)] = &[
    ("/admin", "Dashboard"),
    ("/admin/services", "Services"),
    ("/admin/projects", "Projects"),
    ("/admin/blogposts", "Blog Posts"),
    ("/admin/team", "Team"),
    ("/admin/testimonials", "Testimonials"),
    ("/admin/stats", "Stats"),
    ("/admin/certifications", "Certifications"),
    ("/admin/awards", "Awards"),
    ("/admin/contactsubmissions", "Contact Submissions"),
    ("/admin/sites", "Sites"),
];

#[component]
pub fn AdminSidebar(on_sign_out: Callback<()>) -> impl IntoView {
    view! {
        <aside class="admin-sidebar">
            <div class="admin-sidebar__brand">"PeakStart Admin"</div>
            <nav class="admin-sidebar__nav">
                {ADMIN_LINKS
                    .iter()
                    .map(|(href, label)| view! { <A href=*href attr:class="admin-sidebar__link">{*label}</A> })
                    .collect_view()}
            </nav>
            <A href="/" attr:class="admin-sidebar__link admin-sidebar__link--site">"View site"</A>
            <button class="btn admin-sidebar__sign-out" on:click=move |_| on_sign_out.run(())>
                "Sign out"
            </button>
        </aside>
    }
}
