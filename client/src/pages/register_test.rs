use super::*;
use crate::util::validation::{PASSWORD_TOO_SHORT, PASSWORD_NEEDS_UPPERCASE};

#[test]
fn collect_register_errors_empty_for_valid_input() {
    assert!(collect_register_errors("Alice", "alice@example.com", "Str0ng!pw", "Str0ng!pw").is_empty());
}

#[test]
fn collect_register_errors_reports_everything_in_order() {
    let errors = collect_register_errors(" ", "not-an-email", "abc1!", "abc1?");
    assert_eq!(errors.first(), Some(&NAME_REQUIRED));
    assert_eq!(errors.get(1), Some(&INVALID_EMAIL));
    assert!(errors.contains(&PASSWORD_TOO_SHORT));
    assert!(errors.contains(&PASSWORD_NEEDS_UPPERCASE));
    assert_eq!(errors.last(), Some(&PASSWORDS_DO_NOT_MATCH));
}

#[test]
fn collect_register_errors_mismatch_only() {
    assert_eq!(
        collect_register_errors("Alice", "alice@example.com", "Str0ng!pw", "Str0ng!pX"),
        vec![PASSWORDS_DO_NOT_MATCH]
    );
}
