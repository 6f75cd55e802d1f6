use super::*;

// =============================================================
// validate_email
// =============================================================

#[test]
fn validate_email_accepts_well_formed_addresses() {
    for email in ["a@b.co", "first.last@example.com", "x+tag@sub.domain.org", "ü@ex.ample"] {
        assert!(validate_email(email), "expected valid: {email:?}");
    }
}

#[test]
fn validate_email_rejects_malformed_addresses() {
    for email in [
        "",
        "plain",
        "@example.com",
        "user@",
        "user@example",
        "user@@example.com",
        "us er@example.com",
        "user@exa mple.com",
        "user@example.",
        " user@example.com",
    ] {
        assert!(!validate_email(email), "expected invalid: {email:?}");
    }
}

// =============================================================
// validate_password
// =============================================================

#[test]
fn validate_password_accepts_strong_password() {
    let result = validate_password("Str0ng!pw");
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
}

#[test]
fn validate_password_reports_short_password() {
    let result = validate_password("Ab1!");
    assert!(!result.is_valid);
    assert_eq!(result.errors, vec![PASSWORD_TOO_SHORT]);
}

#[test]
fn validate_password_reports_missing_uppercase() {
    assert_eq!(validate_password("lower1!case").errors, vec![PASSWORD_NEEDS_UPPERCASE]);
}

#[test]
fn validate_password_reports_missing_lowercase() {
    assert_eq!(validate_password("UPPER1!CASE").errors, vec![PASSWORD_NEEDS_LOWERCASE]);
}

#[test]
fn validate_password_reports_missing_number() {
    assert_eq!(validate_password("NoDigits!!").errors, vec![PASSWORD_NEEDS_NUMBER]);
}

#[test]
fn validate_password_reports_missing_special() {
    assert_eq!(validate_password("NoSpecial12").errors, vec![PASSWORD_NEEDS_SPECIAL]);
}

#[test]
fn validate_password_reports_every_rule_in_order() {
    let result = validate_password("");
    assert!(!result.is_valid);
    assert_eq!(
        result.errors,
        vec![
            PASSWORD_TOO_SHORT,
            PASSWORD_NEEDS_UPPERCASE,
            PASSWORD_NEEDS_LOWERCASE,
            PASSWORD_NEEDS_NUMBER,
            PASSWORD_NEEDS_SPECIAL,
        ]
    );
}

#[test]
fn validate_password_accepts_each_listed_special_character() {
    for special in "!@#$%^&*(),.?\":{}|<>".chars() {
        let password = format!("Abcdef1{special}");
        assert!(validate_password(&password).is_valid, "expected valid with {special:?}");
    }
}

#[test]
fn validate_password_ignores_unlisted_symbols() {
    assert_eq!(validate_password("Abcdef1_-").errors, vec![PASSWORD_NEEDS_SPECIAL]);
}
