//! Admin shell: auth guard, sidebar, nested route outlet.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::admin_sidebar::AdminSidebar;
use crate::state::auth::{AuthState, BrowserSessionStore, Guard, SIGN_IN_PATH, guard, restore, sign_out};
use crate::util::time::now_ms;

#[component]
pub fn AdminLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    // Re-read the persisted session on every route change, then guard.
    let navigate_guard = navigate.clone();
    Effect::new(move || {
        let path = location.pathname.get();
        let now = now_ms();
        let stored = restore(&BrowserSessionStore, now);
        if stored != auth.get_untracked() {
            auth.set(stored);
        }
        if guard(&path, &auth.get(), now) == Guard::RedirectToSignIn {
            navigate_guard(SIGN_IN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_sign_out = Callback::new(move |()| {
        auth.set(sign_out(&BrowserSessionStore));
        navigate(SIGN_IN_PATH, NavigateOptions::default());
    });

    view! {
        <Show
            when=move || auth.get().is_authenticated(now_ms())
            fallback=|| view! { <p class="admin-layout__redirect">"Redirecting to sign in..."</p> }
        >
            <div class="admin-layout">
                <AdminSidebar on_sign_out=on_sign_out />
                <main class="admin-layout__content">
                    <Outlet />
                </main>
            </div>
        </Show>
    }
}
