use super::*;
use crate::net::types::CommunityMinimal;

fn make_post() -> Post {
    serde_json::from_value(serde_json::json!({ "id": 3, "title": "Hello", "content": "World" })).unwrap()
}

#[test]
fn post_placement_links_embedded_community_by_slug() {
    let mut post = make_post();
    post.community_id = Some(4);
    post.community = Some(CommunityMinimal { id: 4, name: "Runners".to_owned(), slug: "runners".to_owned() });
    assert_eq!(
        post_placement(&post),
        PostPlacement::Community { name: "Runners".to_owned(), href: "/communities/runners".to_owned() }
    );
}

#[test]
fn post_placement_falls_back_to_id() {
    let mut post = make_post();
    post.community_id = Some(9);
    assert_eq!(post_placement(&post), PostPlacement::CommunityId(9));
}

#[test]
fn post_placement_standalone_without_community() {
    assert_eq!(post_placement(&make_post()), PostPlacement::Standalone);
}

#[test]
fn like_button_label_reflects_liked_flag_and_count() {
    let mut post = make_post();
    post.likes_count = 2;
    assert_eq!(like_button_label(&post), "Like (2)");
    post.is_liked = true;
    post.likes_count = 3;
    assert_eq!(like_button_label(&post), "Unlike (3)");
}

#[test]
fn after_like_toggle_ignores_echoed_counters() {
    let mut current = make_post();
    current.likes_count = 3;
    let mut feed = crate::state::view_state::ListState { items: vec![current.clone()], ..Default::default() };

    // Shape the like endpoint actually returns: counters left at defaults.
    let echoed = make_post();
    assert_eq!((echoed.likes_count, echoed.is_liked), (0, false));

    let next = after_like_toggle(&current);
    feed.replace_where(|p| p.id == echoed.id, &next);
    assert_eq!(like_button_label(&feed.items[0]), "Unlike (4)");

    let next = after_like_toggle(&feed.items[0]);
    feed.replace_where(|p| p.id == next.id, &next);
    assert_eq!(like_button_label(&feed.items[0]), "Like (3)");
}

#[test]
fn after_like_toggle_unlike_floors_at_zero() {
    let mut post = make_post();
    post.is_liked = true;
    let next = after_like_toggle(&post);
    assert!(!next.is_liked);
    assert_eq!(next.likes_count, 0);
    assert_eq!(next.title, "Hello");
}
