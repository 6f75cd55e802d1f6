//! Client-side form validation for registration and login.
//!
//! These checks only gate obviously bad input before a request is sent; the
//! API remains the authority and its 422 messages are shown as-is.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::OnceLock;

use regex::Regex;

pub const MIN_PASSWORD_LEN: usize = 8;

pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters long";
pub const PASSWORD_NEEDS_UPPERCASE: &str = "Password must contain at least one uppercase letter";
pub const PASSWORD_NEEDS_LOWERCASE: &str = "Password must contain at least one lowercase letter";
pub const PASSWORD_NEEDS_NUMBER: &str = "Password must contain at least one number";
pub const PASSWORD_NEEDS_SPECIAL: &str = "Password must contain at least one special character";

const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Result of [`validate_password`]: every failed rule, in a fixed order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordValidation {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

pub fn validate_email(email: &str) -> bool {
    email_regex().is_match(email)
}

pub fn validate_password(password: &str) -> PasswordValidation {
    let mut errors = Vec::new();
    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(PASSWORD_TOO_SHORT);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push(PASSWORD_NEEDS_UPPERCASE);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push(PASSWORD_NEEDS_LOWERCASE);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push(PASSWORD_NEEDS_NUMBER);
    }
    if !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        errors.push(PASSWORD_NEEDS_SPECIAL);
    }
    PasswordValidation { is_valid: errors.is_empty(), errors }
}
