//! Card for a community in browse and dashboard lists.

#[cfg(test)]
#[path = "community_card_test.rs"]
mod community_card_test;

use leptos::prelude::*;

use crate::net::types::Community;
use crate::util::format::count_label;

/// Short membership badge, or `None` for non-members.
pub fn membership_badge(community: &Community) -> Option<&'static str> {
    match (community.is_admin, community.is_member) {
        (true, _) => Some("Admin"),
        (false, true) => Some("Member"),
        (false, false) => None,
    }
}

/// A clickable card linking to `/communities/{slug}`.
#[component]
pub fn CommunityCard(community: Community) -> impl IntoView {
    let href = format!("/communities/{}", community.slug);
    let members = count_label(community.members_count, "member", "members");
    let badge = membership_badge(&community);
    let description = community.description.filter(|d| !d.trim().is_empty());
    let private = community.is_private;

    view! {
        <a href=href class="community-card">
            <h3 class="community-card__name">{community.name}</h3>
            {description.map(|text| view! { <p class="community-card__description">{text}</p> })}
            <div class="community-card__meta">
                <span class="community-card__members">{members}</span>
                <Show when=move || private>
                    <span class="community-card__private">"Private"</span>
                </Show>
                {badge.map(|label| view! { <span class="community-card__badge">{label}</span> })}
            </div>
        </a>
    }
}
