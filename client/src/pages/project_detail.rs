//! Single project at `/portfolio/:id`.

use content::types::Project;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::net::api::{gateway, logged};
use crate::util::route::parse_route_id;

pub const NOT_FOUND: &str = "Project not found";

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let params = use_params_map();
    let project = LocalResource::new(move || {
        let id = parse_route_id(params.with(|p| p.get("id")));
        async move {
            let id = id?;
            logged("project", gateway().project(id).await).into_result().ok()
        }
    });

    view! {
        <div class="project-detail">
            <A href="/portfolio" attr:class="back-link">"← Back to Portfolio"</A>
            {move || match project.get() {
                None => super::loading("project").into_any(),
                Some(None) => view! { <p class="page__not-found">{NOT_FOUND}</p> }.into_any(),
                Some(Some(project)) => detail(project).into_any(),
            }}
        </div>
    }
}

fn detail(project: Project) -> impl IntoView {
    view! {
        <article>
            <img class="project-detail__image" src=project.image alt=project.title.clone() />
            <h1>{project.title}</h1>
            <dl class="project-detail__facts">
                <dt>"Category"</dt>
                <dd>{project.category}</dd>
                <dt>"Location"</dt>
                <dd>{project.location}</dd>
                <dt>"Completed"</dt>
                <dd>{project.completion_date}</dd>
                <dt>"Client"</dt>
                <dd>{project.client}</dd>
            </dl>
            <p>{project.description}</p>
        </article>
    }
}
