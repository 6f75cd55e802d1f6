use super::*;

#[test]
fn build_post_create_trims_fields() {
    let data = build_post_create("  Morning run  ", "\n5k done\n", false, None).unwrap();
    assert_eq!(data.title, "Morning run");
    assert_eq!(data.content, "5k done");
    assert_eq!(data.community_id, None);
}

#[test]
fn build_post_create_keeps_community_and_announcement() {
    let data = build_post_create("Meetup", "Saturday 9am", true, Some(12)).unwrap();
    assert!(data.is_announcement);
    assert_eq!(data.community_id, Some(12));
}

#[test]
fn build_post_create_requires_title_first() {
    assert_eq!(build_post_create("   ", "", false, None), Err(TITLE_REQUIRED));
}

#[test]
fn build_post_create_requires_content() {
    assert_eq!(build_post_create("Title", "  ", false, None), Err(CONTENT_REQUIRED));
}
