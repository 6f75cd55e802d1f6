use super::*;
use crate::net::types::User;

fn make_user() -> User {
    User { id: 1, email: "a@b.co".to_owned(), name: Some("Ann".to_owned()), is_active: true }
}

#[test]
fn should_redirect_unauth_when_ready_and_anonymous() {
    let state = SessionState { user: None, token: None, ready: true };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_before_storage_is_read() {
    let state = SessionState { user: None, token: None, ready: false };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_session_exists() {
    let state = SessionState { user: Some(make_user()), token: Some("tok".to_owned()), ready: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_redirect_when_user_has_no_token() {
    let state = SessionState { user: Some(make_user()), token: None, ready: true };
    assert!(should_redirect_unauth(&state));
}
