//! Single article at `/blog/:id`.

use content::types::BlogPost;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::net::api::{gateway, logged};
use crate::util::markdown::render_post_html;
use crate::util::route::parse_route_id;

pub const NOT_FOUND: &str = "Post not found";

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();
    let post = LocalResource::new(move || {
        let id = parse_route_id(params.with(|p| p.get("id")));
        async move {
            let id = id?;
            logged("blog post", gateway().blog_post(id).await).into_result().ok()
        }
    });

    view! {
        <div class="blog-post">
            <A href="/blog" attr:class="back-link">"← Back to Blog"</A>
            {move || match post.get() {
                None => super::loading("article").into_any(),
                Some(None) => view! { <p class="page__not-found">{NOT_FOUND}</p> }.into_any(),
                Some(Some(post)) => article(post).into_any(),
            }}
        </div>
    }
}

fn article(post: BlogPost) -> impl IntoView {
    let body = render_post_html(&post.content);
    view! {
        <article>
            <span class="blog-post__category">{post.category}</span>
            <h1>{post.title}</h1>
            <p class="blog-post__meta">{format!("By {} · {} · {}", post.author, post.publish_date, post.read_time)}</p>
            <img class="blog-post__image" src=post.image alt="" />
            <div class="blog-post__body" inner_html=body></div>
        </article>
    }
}
