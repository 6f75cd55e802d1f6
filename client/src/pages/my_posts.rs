//! The signed-in user's posts, with delete.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::error_banner::ErrorBanner;
use crate::components::post_card::PostCard;
use crate::components::protected::Protected;
use crate::net::http::ApiClient;
use crate::net::types::Post;
use crate::state::liveness::Liveness;
use crate::state::view_state::ListState;

#[component]
pub fn MyPostsPage() -> impl IntoView {
    view! {
        <Protected>
            <MyPosts />
        </Protected>
    }
}

#[component]
fn MyPosts() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = api.session();
    let liveness = Liveness::for_component();
    let posts = RwSignal::new(ListState::<Post>::default());

    let load_api = api.clone();
    let load_liveness = liveness.clone();
    let load = Callback::new(move |()| {
        let Some(user_id) = session.user().map(|user| user.id) else {
            return;
        };
        posts.update(ListState::begin);
        let api = load_api.clone();
        load_liveness.spawn_guarded(
            async move { crate::net::posts::by_user(&api, user_id).await },
            move |result| posts.update(|s| s.finish(result)),
        );
    });
    load.run(());

    let on_delete = Callback::new(move |id: i64| {
        let api = api.clone();
        liveness.spawn_guarded(async move { crate::net::posts::delete(&api, id).await }, move |result| {
            posts.update(|s| match result {
                Ok(()) => s.remove_where(|p| p.id == id),
                Err(err) => s.fail(&err),
            });
        });
    });

    view! {
        <div class="posts-page">
            <header class="page-header">
                <h1>"My Posts"</h1>
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
                        return view! { <p class="empty-state">"You haven't posted anything yet."</p> }.into_any();
                    }
                    state
                        .items
                        .into_iter()
                        .map(|post| view! { <PostCard post=post on_delete=Some(on_delete) /> })
                        .collect_view()
                        .into_any()
                }}
            </Show>
        </div>
    }
}
