//! One generic admin screen for every content kind.
//!
//! A screen is a heading, the notice banner, the schema-driven form, and the
//! record table, all bound to a single `ResourceManager` signal. The route
//! components below only pick the kind.

use content::filters::Query;
use content::manager::ResourceManager;
use content::types::*;
use content::{Editable, FormState};
use leptos::prelude::*;

use super::crud;
use crate::components::notice::NoticeBanner;
use crate::components::resource_form::resource_form;
use crate::components::resource_table::{RowAction, resource_table};
use crate::state::auth::AuthState;

/// Screen options beyond the kind itself.
#[derive(Clone, Default)]
pub struct ScreenConfig {
    pub query: Option<Signal<Query>>,
    pub defaults: FormState,
    pub extra: Option<RowAction>,
}

/// Mount a manager for `R`, load its list, and render form plus table.
pub fn resource_screen<R: Editable>(config: ScreenConfig) -> impl IntoView {
    let manager = RwSignal::new(ResourceManager::<R>::new().with_defaults(config.defaults));
    let query = config.query.unwrap_or_else(|| Signal::stored(Query::new()));
    resource_panel(manager, query, config.extra)
}

/// Form and table for an existing manager signal. The list loads on mount
/// and again whenever `query` changes.
pub fn resource_panel<R: Editable>(
    manager: RwSignal<ResourceManager<R>>,
    query: Signal<Query>,
    extra: Option<RowAction>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let revision = use_context::<crud::Revision>();
    Effect::new(move || crud::load(manager, query.get()));

    let on_submit = Callback::new(move |()| crud::submit(manager, query.get_untracked(), auth, revision));
    let on_edit = Callback::new(move |id| crud::edit(manager, id));
    let on_delete = Callback::new(move |id| crud::delete(manager, id, query.get_untracked(), auth, revision));

    view! {
        <section class="resource-screen">
            <NoticeBanner notice=Signal::derive(move || manager.with(|m| m.notice().cloned())) />
            {resource_form(manager, on_submit)}
            {resource_table(manager, on_edit, on_delete, extra)}
        </section>
    }
}

fn titled<R: Editable>() -> impl IntoView {
    view! {
        <div class="admin-page">
            <h1>{format!("Manage {}", R::KIND.label())}</h1>
            {resource_screen::<R>(ScreenConfig::default())}
        </div>
    }
}

#[component]
pub fn AdminServicesPage() -> impl IntoView {
    titled::<Service>()
}

#[component]
pub fn AdminProjectsPage() -> impl IntoView {
    titled::<Project>()
}

#[component]
pub fn AdminBlogPostsPage() -> impl IntoView {
    titled::<BlogPost>()
}

#[component]
pub fn AdminTeamPage() -> impl IntoView {
    titled::<TeamMember>()
}

#[component]
pub fn AdminTestimonialsPage() -> impl IntoView {
    titled::<Testimonial>()
}

#[component]
pub fn AdminStatsPage() -> impl IntoView {
    titled::<CompanyStat>()
}

#[component]
pub fn AdminCertificationsPage() -> impl IntoView {
    titled::<Certification>()
}

#[component]
pub fn AdminAwardsPage() -> impl IntoView {
    titled::<Award>()
}
