//! Community browser with search.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::community_card::CommunityCard;
use crate::components::error_banner::ErrorBanner;
use crate::components::protected::Protected;
use crate::net::http::ApiClient;
use crate::net::types::Community;
use crate::state::liveness::Liveness;
use crate::state::view_state::ListState;

#[component]
pub fn CommunitiesPage() -> impl IntoView {
    view! {
        <Protected>
            <Communities />
        </Protected>
    }
}

#[component]
fn Communities() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let liveness = Liveness::for_component();
    let communities = RwSignal::new(ListState::<Community>::default());
    let search = RwSignal::new(String::new());

    let load = Callback::new(move |()| {
        communities.update(ListState::begin);
        let api = api.clone();
        let term = search.get_untracked();
        liveness.spawn_guarded(
            async move { crate::net::communities::list(&api, Some(&term)).await },
            move |result| communities.update(|s| s.finish(result)),
        );
    });
    load.run(());

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        load.run(());
    };

    view! {
        <div class="communities-page">
            <header class="page-header">
                <h1>"Communities"</h1>
                <a class="btn btn--primary" href="/communities/new">
                    "Create Community"
                </a>
            </header>
            <form class="search-form" role="search" on:submit=on_search>
                <input
                    class="form-input"
                    type="search"
                    placeholder="Search communities..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">
                    "Search"
                </button>
            </form>
            <ErrorBanner message=Signal::derive(move || communities.get().error) on_retry=load />
            <Show
                when=move || !communities.get().loading
                fallback=|| view! { <p class="page-status">"Loading communities..."</p> }
            >
                {move || {
                    let state = communities.get();
                    if state.is_empty() && state.error.is_none() {
                        return view! { <p class="empty-state">"No communities found."</p> }.into_any();
                    }
                    view! {
                        <div class="card-grid">
                            {state
                                .items
                                .into_iter()
                                .map(|community| view! { <CommunityCard community=community /> })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }}
            </Show>
        </div>
    }
}
