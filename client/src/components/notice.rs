//! Inline success/error banner.

use content::manager::Notice;
use leptos::prelude::*;

#[component]
pub fn NoticeBanner(#[prop(into)] notice: Signal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|notice| {
            let class = if notice.is_error { "notice notice--error" } else { "notice notice--info" };
            view! { <div class=class role="status">{notice.text}</div> }
        })
    }
}

/// Error-only banner for read screens.
#[component]
pub fn ErrorBanner(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || error.get().map(|text| view! { <div class="notice notice--error" role="alert">{text}</div> })
}
