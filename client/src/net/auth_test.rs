use super::*;
use crate::net::http::{Body, Method};
use crate::net::types::User;

fn make_auth(token: &str) -> AuthResponse {
    AuthResponse {
        access_token: token.to_owned(),
        token_type: "bearer".to_owned(),
        user: User { id: 1, email: "a@b.co".to_owned(), name: None, is_active: true },
    }
}

// =============================================================
// Request construction
// =============================================================

#[test]
fn login_request_is_form_encoded_without_redirect() {
    let req = login_request("a@b.co", "Secret1!");
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.path, "/auth/login");
    assert_eq!(req.body, Body::Form("username=a%40b.co&password=Secret1%21".to_owned()));
    assert!(!req.redirect_on_unauthorized);
}

#[test]
fn register_request_is_json_without_redirect() {
    let data = RegisterData { email: "a@b.co".to_owned(), password: "Secret1!".to_owned(), name: "Ann".to_owned() };
    let req = register_request(&data).unwrap();
    assert_eq!(req.path, "/auth/register");
    assert_eq!(
        req.body,
        Body::Json(serde_json::json!({ "email": "a@b.co", "password": "Secret1!", "name": "Ann" }))
    );
    assert!(!req.redirect_on_unauthorized);
}

// =============================================================
// require_token
// =============================================================

#[test]
fn require_token_accepts_token() {
    assert!(require_token(make_auth("tok")).is_ok());
}

#[test]
fn require_token_rejects_missing_token() {
    assert_eq!(
        require_token(make_auth("")).unwrap_err(),
        ApiError::Decode("Invalid response format".to_owned())
    );
}

// =============================================================
// login_error
// =============================================================

#[test]
fn login_401_is_invalid_credentials() {
    let err = login_error(ApiError::from_response(401, r#"{"detail":"Incorrect email or password"}"#));
    assert_eq!(err.message(), "Invalid email or password");
}

#[test]
fn login_400_prefers_detail() {
    let err = login_error(ApiError::from_response(400, r#"{"detail":"Inactive user"}"#));
    assert_eq!(err.message(), "Inactive user");
    let err = login_error(ApiError::from_response(400, ""));
    assert_eq!(err.message(), "Invalid request");
}

#[test]
fn login_422_is_format_error() {
    let err = login_error(ApiError::from_response(422, r#"{"detail":[{"msg":"field required"}]}"#));
    assert_eq!(err.message(), "Invalid login data format");
}

#[test]
fn login_other_status_is_prefixed() {
    let err = login_error(ApiError::from_response(500, r#"{"detail":"db down"}"#));
    assert_eq!(err.message(), "Login failed: db down");
}

#[test]
fn login_network_error_passes_through() {
    assert_eq!(login_error(ApiError::network()), ApiError::network());
}

// =============================================================
// register_error
// =============================================================

#[test]
fn register_409_is_duplicate_email() {
    let err = register_error(ApiError::from_response(409, ""));
    assert_eq!(err.message(), "Email already registered");
}

#[test]
fn register_422_joins_field_messages() {
    let err = register_error(ApiError::from_response(422, r#"{"detail":[{"msg":"bad email"},{"msg":"too short"}]}"#));
    assert_eq!(err.message(), "bad email, too short");
}

#[test]
fn register_422_without_detail_is_format_error() {
    let err = register_error(ApiError::from_response(422, "{}"));
    assert_eq!(err.message(), "Invalid registration data format");
}

#[test]
fn register_400_prefers_detail() {
    let err = register_error(ApiError::from_response(400, r#"{"detail":"Email already registered"}"#));
    assert_eq!(err.message(), "Email already registered");
    let err = register_error(ApiError::from_response(400, ""));
    assert_eq!(err.message(), "Invalid registration data");
}

#[test]
fn register_other_status_is_prefixed() {
    let err = register_error(ApiError::from_response(503, ""));
    assert_eq!(err.message(), "Registration failed: Request failed with status 503");
}
