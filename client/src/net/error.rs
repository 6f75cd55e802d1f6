//! Normalized API error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Every service call resolves to `ApiError` on failure. The display string
//! is what pages put in their inline error banner, so each variant carries a
//! ready-to-show message derived from the server's `detail` field when one
//! is present.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error - please check your connection";
pub const TIMEOUT_MESSAGE: &str = "Request timed out - please try again";
pub(crate) const INVALID_DATA_MESSAGE: &str = "Invalid request data";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response was received (offline, CORS, DNS, timeout).
    #[error("{0}")]
    Network(String),
    /// 422: field-level messages joined into one string.
    #[error("{0}")]
    Validation(String),
    /// 401: the session is no longer valid.
    #[error("{0}")]
    Unauthorized(String),
    /// 409: e.g. duplicate email or slug.
    #[error("{0}")]
    Conflict(String),
    /// Any other non-success status.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// A success status whose body did not match the expected shape.
    #[error("{0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-success response by status, using the body's `detail`
    /// field for the message when present.
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = detail_message(body);
        match status {
            401 => Self::Unauthorized(detail.unwrap_or_else(|| "Not authenticated".to_owned())),
            409 => Self::Conflict(detail.unwrap_or_else(|| "Conflict with existing data".to_owned())),
            422 => Self::Validation(detail.unwrap_or_else(|| INVALID_DATA_MESSAGE.to_owned())),
            _ => Self::Server { status, message: detail.unwrap_or_else(|| generic_status_message(status)) },
        }
    }

    pub fn network() -> Self {
        Self::Network(NETWORK_ERROR_MESSAGE.to_owned())
    }

    pub fn timeout() -> Self {
        Self::Network(TIMEOUT_MESSAGE.to_owned())
    }

    /// HTTP status of the failed response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Network(_) | Self::Decode(_) => None,
            Self::Unauthorized(_) => Some(401),
            Self::Conflict(_) => Some(409),
            Self::Validation(_) => Some(422),
            Self::Server { status, .. } => Some(*status),
        }
    }

    /// Banner text for this error.
    pub fn message(&self) -> &str {
        match self {
            Self::Network(message)
            | Self::Validation(message)
            | Self::Unauthorized(message)
            | Self::Conflict(message)
            | Self::Decode(message)
            | Self::Server { message, .. } => message,
        }
    }
}

pub(crate) fn generic_status_message(status: u16) -> String {
    format!("Request failed with status {status}")
}

/// Extract a human-readable message from a FastAPI-style error body.
///
/// A string `detail` is returned as-is; an array of validation entries has
/// its `msg` fields joined with `", "`. Anything else yields `None`.
pub fn detail_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) if !detail.trim().is_empty() => Some(detail.clone()),
        serde_json::Value::Array(entries) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(serde_json::Value::as_str))
                .collect();
            if messages.is_empty() { None } else { Some(messages.join(", ")) }
        }
        _ => None,
    }
}
