use super::*;

#[test]
fn feed_title_follows_filter() {
    assert_eq!(feed_title(false), "All Posts");
    assert_eq!(feed_title(true), "Announcements");
}

#[test]
fn empty_feed_message_follows_filter() {
    assert_eq!(empty_feed_message(true), "No announcements yet.");
    assert!(empty_feed_message(false).starts_with("No posts yet"));
}
