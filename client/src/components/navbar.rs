//! Public site header with the primary navigation.

use leptos::prelude::*;
use leptos_router::components::A;

const LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/services", "Services"),
    ("/portfolio", "Portfolio"),
    ("/about", "About"),
    ("/blog", "Blog"),
    ("/contact", "Contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let menu_open = RwSignal::new(false);

    view! {
        <header class="navbar">
            <A href="/" attr:class="navbar__brand">"PeakStart"</A>
            <button
                class="navbar__toggle"
                aria-label="Toggle menu"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>
            <nav class="navbar__links" class:navbar__links--open=move || menu_open.get()>
                {LINKS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <A href=*href attr:class="navbar__link" on:click=move |_| menu_open.set(false)>
                                {*label}
                            </A>
                        }
                    })
                    .collect_view()}
                <A href="/contact" attr:class="btn navbar__cta">"Get a Quote"</A>
            </nav>
        </header>
    }
}
