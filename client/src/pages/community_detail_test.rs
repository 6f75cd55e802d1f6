use super::*;

fn make_community(members_count: i64, is_member: bool, is_admin: bool) -> Community {
    serde_json::from_value(serde_json::json!({
        "id": 5,
        "name": "Runners",
        "slug": "runners",
        "members_count": members_count,
        "is_member": is_member,
        "is_admin": is_admin,
    }))
    .unwrap()
}

#[test]
fn apply_membership_join_counts_locally() {
    // Join echoes the community with counters left at their defaults.
    let current = make_community(3, false, false);
    let returned = make_community(0, false, false);
    let updated = apply_membership(&current, returned, true);
    assert!(updated.is_member);
    assert_eq!(updated.members_count, 4);
    assert!(!updated.is_admin);
}

#[test]
fn apply_membership_leave_clears_member_and_admin() {
    let current = make_community(4, true, true);
    let returned = make_community(0, false, false);
    let updated = apply_membership(&current, returned, false);
    assert!(!updated.is_member);
    assert!(!updated.is_admin);
    assert_eq!(updated.members_count, 3);
}

#[test]
fn apply_membership_leave_floors_count_at_zero() {
    let current = make_community(0, true, false);
    let updated = apply_membership(&current, make_community(0, false, false), false);
    assert_eq!(updated.members_count, 0);
}

#[test]
fn apply_membership_takes_descriptive_fields_from_response() {
    let current = make_community(2, false, false);
    let mut returned = make_community(0, false, false);
    returned.description = Some("Weekend long runs".to_owned());
    let updated = apply_membership(&current, returned, true);
    assert_eq!(updated.description.as_deref(), Some("Weekend long runs"));
}

#[test]
fn apply_membership_join_keeps_known_admin_flag() {
    let current = make_community(1, false, true);
    let updated = apply_membership(&current, make_community(0, false, false), true);
    assert!(updated.is_admin);
}

#[test]
fn membership_action_label_follows_flag() {
    assert_eq!(membership_action_label(&make_community(0, false, false)), "Join Community");
    assert_eq!(membership_action_label(&make_community(1, true, false)), "Leave Community");
}
