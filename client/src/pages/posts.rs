//! Post feed with an announcements filter.
//!
//! Posts are shown in the order the API returns them (newest first). The feed
//! endpoints require a bearer token, so the page sits behind `Protected`. A
//! successful like or unlike flips the card locally; the echoed post carries
//! no counters.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::error_banner::ErrorBanner;
use crate::components::post_card::{PostCard, after_like_toggle};
use crate::components::protected::Protected;
use crate::net::http::ApiClient;
use crate::net::types::Post;
use crate::state::liveness::Liveness;
use crate::state::view_state::ListState;

/// Feed heading for the current filter.
pub fn feed_title(announcements_only: bool) -> &'static str {
    if announcements_only { "Announcements" } else { "All Posts" }
}

pub fn empty_feed_message(announcements_only: bool) -> &'static str {
    if announcements_only { "No announcements yet." } else { "No posts yet. Be the first to share something!" }
}

#[component]
pub fn PostsPage() -> impl IntoView {
    view! {
        <Protected>
            <PostFeed />
        </Protected>
    }
}

#[component]
fn PostFeed() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let liveness = Liveness::for_component();
    let posts = RwSignal::new(ListState::<Post> { loading: true, ..ListState::default() });
    let announcements_only = RwSignal::new(false);

    let load_api = api.clone();
    let load_liveness = liveness.clone();
    let load = Callback::new(move |()| {
        posts.update(ListState::begin);
        let api = load_api.clone();
        let only_announcements = announcements_only.get_untracked();
        load_liveness.spawn_guarded(
            async move {
                if only_announcements {
                    crate::net::posts::announcements(&api).await
                } else {
                    crate::net::posts::list(&api).await
                }
            },
            move |result| posts.update(|s| s.finish(result)),
        );
    });

    load.run(());

    let on_toggle = move |_| {
        announcements_only.update(|only| *only = !*only);
        load.run(());
    };

    let on_like = Callback::new(move |post: Post| {
        let api = api.clone();
        let next = after_like_toggle(&post);
        liveness.spawn_guarded(async move { crate::net::posts::toggle_like(&api, &post).await }, move |result| {
            posts.update(|s| match result {
                Ok(_) => s.replace_where(|p| p.id == next.id, &next),
                Err(err) => s.fail(&err),
            });
        });
    });

    view! {
        <div class="posts-page">
            <header class="page-header">
                <h1>{move || feed_title(announcements_only.get())}</h1>
                <button class="btn" class:btn--active=move || announcements_only.get() on:click=on_toggle>
                    {move || if announcements_only.get() { "Show All Posts" } else { "Announcements Only" }}
                </button>
                <a class="btn btn--primary" href="/posts/create">
                    "Create Post"
                </a>
            </header>
            <ErrorBanner message=Signal::derive(move || posts.get().error) on_retry=load />
            <Show
                when=move || !posts.get().loading
                fallback=|| view! { <p class="page-status">"Loading posts..."</p> }
            >
                {move || {
                    let state = posts.get();
                    if state.is_empty() && state.error.is_none() {
                        return view! { <p class="empty-state">{empty_feed_message(announcements_only.get())}</p> }
                            .into_any();
                    }
                    state
                        .items
                        .into_iter()
                        .map(|post| view! { <PostCard post=post on_like=Some(on_like) /> })
                        .collect_view()
                        .into_any()
                }}
            </Show>
        </div>
    }
}
