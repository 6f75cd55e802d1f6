//! Auth service: login and registration.
//!
//! ERROR HANDLING
//! ==============
//! Both calls opt out of the global 401 redirect so rejected credentials
//! surface on the form. Status codes map to the fixed messages users see;
//! anything else falls back to the server's `detail`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::error::ApiError;
use super::http::{ApiClient, ApiRequest};
use super::types::{AuthResponse, RegisterData};

const LOGIN_PATH: &str = "/auth/login";
const REGISTER_PATH: &str = "/auth/register";

/// `POST /auth/login` with form fields `username` and `password`.
///
/// # Errors
///
/// Returns a normalized login error; see [`login_error`].
pub async fn login(api: &ApiClient, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let request = login_request(email, password);
    let response = api.send::<AuthResponse>(request).await.map_err(login_error)?;
    require_token(response)
}

/// `POST /auth/register` with a JSON body.
///
/// # Errors
///
/// Returns a normalized registration error; see [`register_error`].
pub async fn register(api: &ApiClient, data: &RegisterData) -> Result<AuthResponse, ApiError> {
    let request = register_request(data)?;
    let response = api.send::<AuthResponse>(request).await.map_err(register_error)?;
    require_token(response)
}

pub(crate) fn login_request(email: &str, password: &str) -> ApiRequest {
    ApiRequest::post(LOGIN_PATH)
        .form(&[("username", email), ("password", password)])
        .without_unauthorized_redirect()
}

pub(crate) fn register_request(data: &RegisterData) -> Result<ApiRequest, ApiError> {
    Ok(ApiRequest::post(REGISTER_PATH).json(data)?.without_unauthorized_redirect())
}

/// A success body must carry a token to become a session.
pub(crate) fn require_token(response: AuthResponse) -> Result<AuthResponse, ApiError> {
    if response.access_token.trim().is_empty() {
        return Err(ApiError::Decode("Invalid response format".to_owned()));
    }
    Ok(response)
}

pub(crate) fn login_error(err: ApiError) -> ApiError {
    match err {
        ApiError::Unauthorized(_) => ApiError::Unauthorized("Invalid email or password".to_owned()),
        ApiError::Validation(_) => ApiError::Validation("Invalid login data format".to_owned()),
        ApiError::Server { status: 400, message } => ApiError::Server {
            status: 400,
            message: detail_or(&message, 400, "Invalid request"),
        },
        ApiError::Server { status, message } => {
            ApiError::Server { status, message: format!("Login failed: {message}") }
        }
        other => other,
    }
}

pub(crate) fn register_error(err: ApiError) -> ApiError {
    match err {
        ApiError::Conflict(_) => ApiError::Conflict("Email already registered".to_owned()),
        ApiError::Validation(message) => ApiError::Validation(if message == super::error::INVALID_DATA_MESSAGE {
            "Invalid registration data format".to_owned()
        } else {
            message
        }),
        ApiError::Server { status: 400, message } => ApiError::Server {
            status: 400,
            message: detail_or(&message, 400, "Invalid registration data"),
        },
        ApiError::Server { status, message } => {
            ApiError::Server { status, message: format!("Registration failed: {message}") }
        }
        other => other,
    }
}

/// Keep a server-provided message, replacing the generic status text.
fn detail_or(message: &str, status: u16, fallback: &str) -> String {
    if message == super::error::generic_status_message(status) {
        fallback.to_owned()
    } else {
        message.to_owned()
    }
}
