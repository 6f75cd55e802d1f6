use super::*;

#[test]
fn nav_links_for_guests_are_login_and_register() {
    let hrefs: Vec<&str> = nav_links(false).iter().map(|(href, _)| *href).collect();
    assert_eq!(hrefs, vec!["/login", "/register"]);
}

#[test]
fn nav_links_for_members_cover_protected_screens() {
    let hrefs: Vec<&str> = nav_links(true).iter().map(|(href, _)| *href).collect();
    assert!(hrefs.contains(&"/dashboard"));
    assert!(hrefs.contains(&"/posts/my"));
    assert!(!hrefs.contains(&"/login"));
}
