//! Dashboard: greeting, quick actions and the user's communities.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route after login and registration. Loads
//! `/communities/my` on mount; everything else is static navigation.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::community_card::CommunityCard;
use crate::components::error_banner::ErrorBanner;
use crate::components::protected::Protected;
use crate::config::LOGIN_PATH;
use crate::net::http::ApiClient;
use crate::net::types::{Community, User};
use crate::state::liveness::Liveness;
use crate::state::view_state::ListState;

/// `(href, label)` quick-action buttons.
pub const QUICK_ACTIONS: &[(&str, &str)] = &[
    ("/posts/create", "Create New Post"),
    ("/posts/my", "View My Posts"),
    ("/communities", "Browse Communities"),
    ("/communities/new", "Start a Community"),
];

pub fn greeting(user: Option<&User>) -> String {
    match user {
        Some(user) => format!("Welcome, {}", user.display_name()),
        None => "Welcome".to_owned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Protected>
            <Dashboard />
        </Protected>
    }
}

#[component]
fn Dashboard() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = api.session();
    let liveness = Liveness::for_component();
    let navigate = use_navigate();
    let communities = RwSignal::new(ListState::<Community>::default());

    let load = Callback::new(move |()| {
        communities.update(ListState::begin);
        let api = api.clone();
        liveness.spawn_guarded(async move { crate::net::communities::mine(&api).await }, move |result| {
            communities.update(|s| s.finish(result));
        });
    });
    load.run(());

    let on_logout = move |_| {
        session.logout();
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{move || greeting(session.user().as_ref())}</h1>
                <button class="btn dashboard-page__logout" on:click=on_logout>
                    "Logout"
                </button>
            </header>

            <section class="dashboard-page__panel">
                <h2>"Quick Actions"</h2>
                <div class="dashboard-page__actions">
                    {QUICK_ACTIONS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <a class="btn dashboard-page__action" href=*href>
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="dashboard-page__panel">
                <h2>"My Communities"</h2>
                <ErrorBanner message=Signal::derive(move || communities.get().error) on_retry=load />
                <Show
                    when=move || !communities.get().loading
                    fallback=|| view! { <p class="page-status">"Loading communities..."</p> }
                >
                    {move || {
                        let state = communities.get();
                        if state.is_empty() {
                            if state.error.is_some() {
                                return ().into_any();
                            }
                            return view! {
                                <p class="empty-state">
                                    "You haven't joined any communities yet. "
                                    <a href="/communities">"Browse communities"</a>
                                </p>
                            }
                                .into_any();
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
            </section>
        </div>
    }
}
