//! Blog index with category chips and search-as-you-type.
//!
//! Each keystroke or category change refetches; the listing drops any
//! response that arrives after a newer request was issued.

use content::filters::BlogQuery;
use content::types::BlogPost;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::notice::ErrorBanner;
use crate::net::api::{gateway, logged, spawn};
use crate::state::catalog::{Listing, category_options};

#[component]
pub fn BlogPage() -> impl IntoView {
    let query = RwSignal::new(BlogQuery::default());
    let posts = RwSignal::new(Listing::<BlogPost>::default());
    let categories = LocalResource::new(|| async {
        logged("blog categories", gateway().blog_categories().await).data.unwrap_or_default()
    });

    Effect::new(move || {
        let filter = query.get();
        let Some(ticket) = posts.try_update(Listing::begin) else {
            return;
        };
        spawn(async move {
            let resp = logged("blog posts", gateway().blog_posts(&filter).await);
            posts.update(|listing| {
                listing.finish(ticket, resp);
            });
        });
    });

    let error = Signal::derive(move || posts.with(|l| l.error().map(str::to_owned)));

    view! {
        <div class="blog-page">
            <section class="page-header">
                <h1>"News & Insights"</h1>
            </section>
            <div class="filter-bar">
                <input
                    class="filter-bar__search"
                    type="search"
                    placeholder="Search articles..."
                    prop:value=move || query.with(|q| q.search.clone())
                    on:input=move |ev| query.update(|q| q.search = event_target_value(&ev))
                />
                {move || {
                    category_options(&categories.get().unwrap_or_default())
                        .into_iter()
                        .map(|category| {
                            let current = category.clone();
                            let chosen = category.clone();
                            view! {
                                <button
                                    class="filter-bar__chip"
                                    class:filter-bar__chip--active=move || query.with(|q| q.category == current)
                                    on:click=move |_| query.update(|q| q.category = chosen.clone())
                                >
                                    {category}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <ErrorBanner error=error />
            <div class="card-grid">
                {move || {
                    let listing = posts.get();
                    if listing.records.is_empty() && listing.error().is_none() {
                        return view! { <p class="page__empty">"No articles match your search."</p> }.into_any();
                    }
                    listing.records.into_iter().map(post_card).collect_view().into_any()
                }}
            </div>
        </div>
    }
}

fn post_card(post: BlogPost) -> impl IntoView {
    let href = format!("/blog/{}", post.id);
    view! {
        <article class="card post-card">
            <img class="post-card__image" src=post.image alt="" />
            <span class="post-card__category">{post.category}</span>
            <h3>
                <A href=href.clone()>{post.title}</A>
            </h3>
            <p>{post.excerpt}</p>
            <p class="post-card__meta">{format!("{} · {} · {}", post.author, post.publish_date, post.read_time)}</p>
            <A href=href attr:class="post-card__more">"Read More"</A>
        </article>
    }
}
