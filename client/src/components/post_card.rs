//! Card for a single post in feeds, community pages and "my posts".
//!
//! DESIGN
//! ======
//! The card is stateless: like and delete clicks are reported to the owning
//! page, which calls the service and swaps the updated post into its list.

#[cfg(test)]
#[path = "post_card_test.rs"]
mod post_card_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::types::Post;
use crate::util::format::{count_label, display_date};

/// Where a post lives, for the card's context line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PostPlacement {
    Community { name: String, href: String },
    /// Only the id is known (the API did not embed the community).
    CommunityId(i64),
    Standalone,
}

pub fn post_placement(post: &Post) -> PostPlacement {
    match (&post.community, post.community_id) {
        (Some(community), _) => PostPlacement::Community {
            name: community.name.clone(),
            href: format!("/communities/{}", community.slug),
        },
        (None, Some(id)) => PostPlacement::CommunityId(id),
        (None, None) => PostPlacement::Standalone,
    }
}

pub fn like_button_label(post: &Post) -> String {
    let verb = if post.is_liked { "Unlike" } else { "Like" };
    format!("{verb} ({})", post.likes_count)
}

/// The post as it reads after a successful like or unlike.
///
/// The like endpoints echo the post without computing its counters, so the
/// flag flips and the count moves by one from the card's current values.
pub fn after_like_toggle(current: &Post) -> Post {
    let is_liked = !current.is_liked;
    let likes_count = if is_liked { current.likes_count + 1 } else { (current.likes_count - 1).max(0) };
    Post { is_liked, likes_count, ..current.clone() }
}

#[component]
pub fn PostCard(
    post: Post,
    #[prop(default = None)] on_like: Option<Callback<Post>>,
    #[prop(default = None)] on_delete: Option<Callback<i64>>,
    #[prop(optional)] hide_community: bool,
) -> impl IntoView {
    let post_id = post.id;
    let placement = (!hide_community).then(|| post_placement(&post));
    let byline = match display_date(post.created_at.as_deref()) {
        Some(date) => format!("{} · {date}", post.author_name()),
        None => post.author_name().to_owned(),
    };
    let comments = count_label(post.comments_count, "comment", "comments");
    let like_label = like_button_label(&post);
    let liked = post.is_liked;
    let announcement = post.is_announcement;
    let like_target = post.clone();

    view! {
        <article class="post-card" class:post-card--announcement=announcement>
            <header class="post-card__header">
                <h3 class="post-card__title">{post.title}</h3>
                <Show when=move || announcement>
                    <span class="post-card__badge">"Announcement"</span>
                </Show>
            </header>
            {placement
                .map(|placement| match placement {
                    PostPlacement::Community { name, href } => {
                        view! {
                            <a href=href class="post-card__community">
                                {name}
                            </a>
                        }
                            .into_any()
                    }
                    PostPlacement::CommunityId(id) => {
                        view! { <span class="post-card__community">{format!("Community #{id}")}</span> }
                            .into_any()
                    }
                    PostPlacement::Standalone => view! { <span class="post-card__community">"General"</span> }.into_any(),
                })}
            <p class="post-card__byline">{byline}</p>
            <p class="post-card__content">{post.content}</p>
            <footer class="post-card__footer">
                {match on_like {
                    Some(on_like) => {
                        view! {
                            <button
                                class="btn post-card__like"
                                class:post-card__like--active=liked
                                on:click=move |_| on_like.run(like_target.clone())
                            >
                                {like_label}
                            </button>
                        }
                            .into_any()
                    }
                    None => view! { <span class="post-card__likes">{like_label}</span> }.into_any(),
                }}
                <span class="post-card__comments">{comments}</span>
                {on_delete
                    .map(|on_delete| {
                        view! {
                            <button
                                class="btn post-card__delete"
                                title="Delete post"
                                on:click=move |_| on_delete.run(post_id)
                            >
                                "Delete"
                            </button>
                        }
                    })}
            </footer>
        </article>
    }
}
