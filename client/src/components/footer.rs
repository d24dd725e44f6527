//! Public site footer.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    let year = crate::util::time::today().year();

    view! {
        <footer class="footer">
            <div class="footer__columns">
                <div class="footer__about">
                    <h3>"PeakStart Construction"</h3>
                    <p>"Commercial, residential and industrial builds delivered on time and on budget."</p>
                </div>
                <nav class="footer__links">
                    <A href="/services">"Services"</A>
                    <A href="/portfolio">"Portfolio"</A>
                    <A href="/about">"About"</A>
                    <A href="/blog">"Blog"</A>
                    <A href="/contact">"Contact"</A>
                </nav>
            </div>
            <p class="footer__legal">{format!("© {year} PeakStart Construction. All rights reserved.")}</p>
        </footer>
    }
}
