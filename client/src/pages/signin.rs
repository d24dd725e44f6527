//! Sign-in page for the back-office.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{ADMIN_PATH, AuthState, BrowserSessionStore, sign_in};
use crate::util::time::now_ms;

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    // Already signed in: go straight to the dashboard.
    let navigate_admin = navigate.clone();
    Effect::new(move || {
        if auth.get().is_authenticated(now_ms()) {
            navigate_admin(ADMIN_PATH, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match sign_in(&BrowserSessionStore, &email.get(), &password.get(), now_ms()) {
            Ok(state) => {
                info.set(String::new());
                auth.set(state);
                navigate(ADMIN_PATH, NavigateOptions::default());
            }
            Err(message) => info.set(message.to_owned()),
        }
    };

    view! {
        <div class="signin-page">
            <form class="signin-card" on:submit=on_submit>
                <h1>"Admin Sign In"</h1>
                <input
                    class="signin-input"
                    type="email"
                    placeholder="you@peakstart.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="signin-input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">"Sign In"</button>
                <Show when=move || !info.get().is_empty()>
                    <p class="signin-message">{move || info.get()}</p>
                </Show>
            </form>
        </div>
    }
}
