//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public pages are read-only consumers of the content gateway; they fetch
//! on mount (and on filter change) and render. Everything under `admin`
//! sits behind the auth guard in `admin::layout`.

pub mod about;
pub mod admin;
pub mod blog;
pub mod blog_post;
pub mod contact;
pub mod home;
pub mod portfolio;
pub mod project_detail;
pub mod services;
pub mod signin;

use leptos::prelude::*;

/// Placeholder shown while a page's first fetch is in flight.
pub(crate) fn loading(label: &'static str) -> impl IntoView {
    view! { <p class="page__loading">{format!("Loading {label}...")}</p> }
}
