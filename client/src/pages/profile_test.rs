use super::*;

#[test]
fn profile_rows_show_account_fields() {
    let user = User { id: 42, email: "alice@example.com".to_owned(), name: Some("Alice".to_owned()), is_active: true };
    assert_eq!(
        profile_rows(&user),
        vec![
            ("Name", "Alice".to_owned()),
            ("Email", "alice@example.com".to_owned()),
            ("User ID", "42".to_owned()),
            ("Status", "Active".to_owned()),
        ]
    );
}

#[test]
fn profile_rows_mark_missing_name() {
    let user = User { id: 1, email: "a@b.co".to_owned(), name: Some("  ".to_owned()), is_active: false };
    let rows = profile_rows(&user);
    assert_eq!(rows[0], ("Name", "Not set".to_owned()));
    assert_eq!(rows[3], ("Status", "Inactive".to_owned()));
}
