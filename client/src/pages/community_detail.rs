//! Community detail: header, membership actions, posts and a composer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routed at `/communities/:slug`. The community is fetched by slug, then its
//! posts by id. Join/leave take descriptive fields from the server response
//! but count members locally, since the response leaves the counters unset.
//! Admins may delete the community after a confirmation step.
//!
//! DESIGN
//! ======
//! The load runs from an `Effect` keyed on the slug so moving between
//! communities reuses the mounted view. Both state signals start in the
//! loading state so server and browser render the same placeholder. Each load
//! takes a generation ticket; a response for a superseded slug is dropped.

#[cfg(test)]
#[path = "community_detail_test.rs"]
mod community_detail_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::error_banner::ErrorBanner;
use crate::components::post_card::PostCard;
use crate::components::protected::Protected;
use crate::net::http::ApiClient;
use crate::net::types::{Community, Post};
use crate::pages::post_form::PostForm;
use crate::state::liveness::Liveness;
use crate::state::view_state::{Generation, ItemState, ListState};
use crate::util::format::count_label;

/// Community state after a confirmed join (`joined`) or leave.
///
/// Descriptive fields come from the server response. The membership flags
/// follow the action that succeeded and the member count moves by one from
/// the current value, never below zero.
pub fn apply_membership(current: &Community, returned: Community, joined: bool) -> Community {
    let members_count = if joined { current.members_count + 1 } else { (current.members_count - 1).max(0) };
    Community { is_member: joined, is_admin: joined && current.is_admin, members_count, ..returned }
}

pub fn membership_action_label(community: &Community) -> &'static str {
    if community.is_member { "Leave Community" } else { "Join Community" }
}

#[component]
pub fn CommunityDetailPage() -> impl IntoView {
    view! {
        <Protected>
            <CommunityDetail />
        </Protected>
    }
}

#[component]
fn CommunityDetail() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let liveness = Liveness::for_component();
    let navigate = use_navigate();
    let params = use_params_map();

    let community = RwSignal::new(ItemState::<Community> { loading: true, ..ItemState::default() });
    let posts = RwSignal::new(ListState::<Post> { loading: true, ..ListState::default() });
    let busy = RwSignal::new(false);
    let confirm_delete = RwSignal::new(false);
    let generation = StoredValue::new(Generation::default());

    let load_api = api.clone();
    let load_liveness = liveness.clone();
    Effect::new(move || {
        let slug = params.with(|p| p.get("slug")).unwrap_or_default();
        community.update(|s| {
            s.begin();
            s.value = None;
        });
        posts.update(|s| {
            s.begin();
            s.items.clear();
        });
        confirm_delete.set(false);

        let mut tickets = generation.get_value();
        let ticket = tickets.advance();
        generation.set_value(tickets);

        let api = load_api.clone();
        load_liveness.spawn_guarded(
            async move {
                let found = crate::net::communities::get_by_slug(&api, &slug).await;
                let community_posts = match &found {
                    Ok(found) => Some(crate::net::posts::by_community(&api, found.id).await),
                    Err(_) => None,
                };
                (found, community_posts)
            },
            move |(found, community_posts)| {
                if !generation.with_value(|g| g.is_current(ticket)) {
                    return;
                }
                community.update(|s| s.finish(found));
                posts.update(|s| match community_posts {
                    Some(result) => s.finish(result),
                    None => s.loading = false,
                });
            },
        );
    });

    let deleted = RwSignal::new(false);
    Effect::new(move || {
        if deleted.get() {
            navigate("/communities", NavigateOptions::default());
        }
    });

    let membership_api = api.clone();
    let membership_liveness = liveness.clone();
    let on_membership = Callback::new(move |()| {
        let Some(current) = community.with(|s| s.value.clone()) else {
            return;
        };
        if busy.get() {
            return;
        }
        busy.set(true);
        let joining = !current.is_member;
        let api = membership_api.clone();
        let id = current.id;
        membership_liveness.spawn_guarded(
            async move {
                if joining {
                    crate::net::communities::join(&api, id).await
                } else {
                    crate::net::communities::leave(&api, id).await
                }
            },
            move |result| {
                busy.set(false);
                match result {
                    Ok(returned) => community.update(|s| {
                        s.value = Some(apply_membership(&current, returned, joining));
                        s.error = None;
                    }),
                    Err(err) => community.update(|s| s.fail(&err)),
                }
            },
        );
    });

    let on_delete = Callback::new(move |()| {
        let Some(id) = community.with(|s| s.value.as_ref().map(|c| c.id)) else {
            return;
        };
        busy.set(true);
        let api = api.clone();
        liveness.spawn_guarded(async move { crate::net::communities::delete(&api, id).await }, move |result| {
            busy.set(false);
            confirm_delete.set(false);
            match result {
                Ok(_) => deleted.set(true),
                Err(err) => community.update(|s| s.fail(&err)),
            }
        });
    });

    let on_post_created = Callback::new(move |post: Post| posts.update(|s| s.prepend(post)));

    view! {
        <div class="community-page">
            <ErrorBanner message=Signal::derive(move || community.get().error) />
            <Show
                when=move || !community.get().loading
                fallback=|| view! { <p class="page-status">"Loading community..."</p> }
            >
                {move || {
                    let Some(current) = community.get().value else {
                        return view! { <p class="empty-state">"Community not found."</p> }.into_any();
                    };
                    let members = count_label(current.members_count, "member", "members");
                    let label = membership_action_label(&current);
                    let is_admin = current.is_admin;
                    let community_id = current.id;
                    view! {
                        <header class="community-page__header">
                            <div>
                                <h1>{current.name}</h1>
                                {current.description.map(|text| view! { <p class="community-page__description">{text}</p> })}
                                <span class="community-page__members">{members}</span>
                            </div>
                            <div class="community-page__actions">
                                <button
                                    class="btn"
                                    on:click=move |_| on_membership.run(())
                                    disabled=move || busy.get()
                                >
                                    {label}
                                </button>
                                {is_admin.then(|| view! { <AdminDelete confirm=confirm_delete busy=busy on_delete=on_delete /> })}
                            </div>
                        </header>
                        <section class="community-page__composer">
                            <h2>"Create a Post"</h2>
                            <PostForm community_id=community_id on_created=on_post_created />
                        </section>
                    }
                        .into_any()
                }}
            </Show>

            <section class="community-page__posts">
                <h2>"Posts"</h2>
                <ErrorBanner message=Signal::derive(move || posts.get().error) />
                <Show
                    when=move || !posts.get().loading
                    fallback=|| view! { <p class="page-status">"Loading posts..."</p> }
                >
                    {move || {
                        let state = posts.get();
                        if state.is_empty() {
                            return view! { <p class="empty-state">"No posts yet."</p> }.into_any();
                        }
                        state
                            .items
                            .into_iter()
                            .map(|post| view! { <PostCard post=post hide_community=true /> })
                            .collect_view()
                            .into_any()
                    }}
                </Show>
            </section>
        </div>
    }
}

/// Two-step delete control shown to community admins.
#[component]
fn AdminDelete(confirm: RwSignal<bool>, busy: RwSignal<bool>, on_delete: Callback<()>) -> impl IntoView {
    view! {
        <Show
            when=move || confirm.get()
            fallback=move || {
                view! {
                    <button class="btn btn--danger" on:click=move |_| confirm.set(true)>
                        "Delete Community"
                    </button>
                }
            }
        >
            <button class="btn btn--danger" on:click=move |_| on_delete.run(()) disabled=move || busy.get()>
                "Confirm Delete"
            </button>
            <button class="btn" on:click=move |_| confirm.set(false)>
                "Cancel"
            </button>
        </Show>
    }
}
