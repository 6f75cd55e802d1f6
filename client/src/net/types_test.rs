use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user() -> User {
    User { id: 7, email: "alice@example.com".to_owned(), name: Some("Alice".to_owned()), is_active: true }
}

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_server_shape() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 7,
        "email": "alice@example.com",
        "name": "Alice",
        "is_active": true
    }))
    .unwrap();
    assert_eq!(user, make_user());
}

#[test]
fn user_is_active_defaults_true_and_name_optional() {
    let user: User = serde_json::from_value(serde_json::json!({ "id": 3, "email": "b@example.com" })).unwrap();
    assert!(user.is_active);
    assert!(user.name.is_none());
}

#[test]
fn user_display_name_falls_back_to_email() {
    let mut user = make_user();
    assert_eq!(user.display_name(), "Alice");
    user.name = Some("   ".to_owned());
    assert_eq!(user.display_name(), "alice@example.com");
    user.name = None;
    assert_eq!(user.display_name(), "alice@example.com");
}

// =============================================================
// AuthResponse
// =============================================================

#[test]
fn auth_response_deserializes_token_and_user() {
    let resp: AuthResponse = serde_json::from_value(serde_json::json!({
        "access_token": "tok-1",
        "token_type": "bearer",
        "user": { "id": 7, "email": "alice@example.com", "name": "Alice" }
    }))
    .unwrap();
    assert_eq!(resp.access_token, "tok-1");
    assert_eq!(resp.token_type, "bearer");
    assert_eq!(resp.user.id, 7);
}

#[test]
fn auth_response_missing_token_is_empty() {
    let resp: AuthResponse = serde_json::from_value(serde_json::json!({
        "user": { "id": 7, "email": "alice@example.com" }
    }))
    .unwrap();
    assert!(resp.access_token.is_empty());
    assert_eq!(resp.token_type, "bearer");
}

// =============================================================
// Community
// =============================================================

#[test]
fn community_deserializes_full_payload() {
    let community: Community = serde_json::from_value(serde_json::json!({
        "id": 4,
        "name": "Runners",
        "slug": "runners",
        "description": "Morning runs",
        "is_private": false,
        "created_at": "2024-03-01T10:00:00",
        "created_by_id": 7,
        "members_count": 12,
        "is_member": true,
        "is_admin": false,
        "members": []
    }))
    .unwrap();
    assert_eq!(community.id, 4);
    assert_eq!(community.slug, "runners");
    assert_eq!(community.members_count, 12);
    assert!(community.is_member);
    assert!(!community.is_admin);
}

#[test]
fn community_tolerates_missing_optional_fields() {
    let community: Community =
        serde_json::from_value(serde_json::json!({ "id": 1, "name": "Yoga", "slug": "yoga" })).unwrap();
    assert_eq!(community.description, None);
    assert_eq!(community.members_count, 0);
    assert!(!community.is_member);
}

#[test]
fn community_create_omits_missing_description() {
    let body = CommunityCreate { name: "Yoga".to_owned(), description: None, is_private: true };
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({ "name": "Yoga", "is_private": true }));
}

#[test]
fn community_update_serializes_only_set_fields() {
    let body = CommunityUpdate { description: Some("New".to_owned()), ..CommunityUpdate::default() };
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({ "description": "New" }));
}

// =============================================================
// Post
// =============================================================

#[test]
fn post_deserializes_with_embedded_author_and_community() {
    let post: Post = serde_json::from_value(serde_json::json!({
        "id": 11,
        "title": "Hello",
        "content": "First post",
        "is_announcement": true,
        "author_id": 7,
        "community_id": 4,
        "created_at": "2024-03-02T08:30:00",
        "updated_at": null,
        "author": { "id": 7, "email": "alice@example.com", "name": "Alice" },
        "community": { "id": 4, "name": "Runners", "slug": "runners" },
        "likes_count": 3,
        "comments_count": 1,
        "is_liked": true,
        "comments": []
    }))
    .unwrap();
    assert_eq!(post.id, 11);
    assert!(post.is_announcement);
    assert_eq!(post.community.as_ref().map(|c| c.slug.as_str()), Some("runners"));
    assert_eq!(post.likes_count, 3);
    assert_eq!(post.author_name(), "Alice");
}

#[test]
fn post_null_counters_and_flags_collapse_to_defaults() {
    let post: Post = serde_json::from_value(serde_json::json!({
        "id": 2,
        "title": "T",
        "content": "C",
        "likes_count": null,
        "comments_count": null,
        "is_liked": null,
        "is_announcement": null
    }))
    .unwrap();
    assert_eq!(post.likes_count, 0);
    assert_eq!(post.comments_count, 0);
    assert!(!post.is_liked);
    assert!(!post.is_announcement);
    assert_eq!(post.author_name(), "Anonymous");
}

#[test]
fn post_counter_accepts_integral_float() {
    let post: Post =
        serde_json::from_value(serde_json::json!({ "id": 2.0, "likes_count": 5.0 })).unwrap();
    assert_eq!(post.id, 2);
    assert_eq!(post.likes_count, 5);
}

#[test]
fn post_counter_rejects_string() {
    let result = serde_json::from_value::<Post>(serde_json::json!({ "id": 2, "likes_count": "five" }));
    assert!(result.is_err());
}

#[test]
fn post_create_omits_missing_community() {
    let body = PostCreate {
        title: "T".to_owned(),
        content: "C".to_owned(),
        is_announcement: false,
        community_id: None,
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "title": "T", "content": "C", "is_announcement": false })
    );
}
