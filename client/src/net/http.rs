//! HTTP client wrapper for the HealthSpace REST API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): requests fail with a network error since the API is
//! only called from the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every service goes through `ApiClient::send`, which joins the configured
//! base URL, attaches `Authorization: Bearer <token>` from the session store,
//! applies the fixed request timeout, and normalizes failures into
//! `ApiError`. A 401 response clears the session and navigates to the login
//! screen, at most once per unauthorized episode.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::config::ClientConfig;
use crate::state::session::SessionStore;
use crate::state::unauthorized::UnauthorizedGuard;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    Empty,
    Json(serde_json::Value),
    /// Pre-encoded `application/x-www-form-urlencoded` payload.
    Form(String),
}

/// One outgoing API call, described independently of the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Resource path relative to the API base, e.g. `/communities/`.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Body,
    /// Whether a 401 triggers the global logout + redirect. Auth endpoints
    /// opt out so bad credentials surface as a form error.
    pub redirect_on_unauthorized: bool,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: Body::Empty, redirect_on_unauthorized: true }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    #[must_use]
    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_owned(), value.to_owned()));
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` if `body` cannot be serialized.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.body = Body::Json(value);
        Ok(self)
    }

    #[must_use]
    pub fn form(mut self, fields: &[(&str, &str)]) -> Self {
        self.body = Body::Form(encode_form(fields));
        self
    }

    #[must_use]
    pub fn without_unauthorized_redirect(mut self) -> Self {
        self.redirect_on_unauthorized = false;
        self
    }
}

/// Join `base` and `path` with exactly one `/` and append the encoded query.
pub fn endpoint_url(base: &str, path: &str, query: &[(String, String)]) -> String {
    let mut url = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    if !query.is_empty() {
        let encoded = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .finish();
        url.push('?');
        url.push_str(&encoded);
    }
    url
}

/// `Authorization` header value for `token`, if there is a usable token.
pub fn bearer_value(token: Option<&str>) -> Option<String> {
    token
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| format!("Bearer {token}"))
}

pub(crate) fn encode_form(fields: &[(&str, &str)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields.iter().copied())
        .finish()
}

/// Turn a status + body into the typed payload or a normalized error.
pub(crate) fn read_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_response(status, body));
    }
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(format!("Unexpected response from server: {e}")))
}

/// Shared API handle provided as context to every page.
#[derive(Clone, Debug)]
pub struct ApiClient {
    config: Arc<ClientConfig>,
    session: SessionStore,
    unauthorized: UnauthorizedGuard,
}

impl ApiClient {
    pub fn new(config: ClientConfig, session: SessionStore) -> Self {
        Self { config: Arc::new(config), session, unauthorized: UnauthorizedGuard::new() }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> SessionStore {
        self.session
    }

    pub fn unauthorized_guard(&self) -> &UnauthorizedGuard {
        &self.unauthorized
    }

    pub fn url_for(&self, request: &ApiRequest) -> String {
        endpoint_url(&self.config.api_base_url, &request.path, &request.query)
    }

    /// Send `request` and decode the JSON response body as `T`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Network` when no response arrives in time, the
    /// status-classified error for non-2xx responses, and `ApiError::Decode`
    /// when a success body does not match `T`.
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url_for(&request);
            log::debug!("api request: {} {url}", request.method);
            let (status, body) = self.transport(&request, &url).await?;
            log::debug!("api response: {} {url} -> {status}", request.method);

            let result = read_response(status, &body);
            if let Err(err) = &result {
                log::warn!("api error: {} {url} -> {status}: {err}", request.method);
                if status == 401 && request.redirect_on_unauthorized {
                    self.handle_unauthorized();
                }
            }
            result
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }

    /// Clear the session and go to the login screen, once per episode.
    pub fn handle_unauthorized(&self) {
        let session = self.session;
        self.unauthorized.run_once(move || {
            session.clear();
            #[cfg(feature = "hydrate")]
            {
                log::warn!("session rejected by server; redirecting to login");
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(crate::config::LOGIN_PATH);
                }
            }
        });
    }

    #[cfg(feature = "hydrate")]
    async fn transport(&self, request: &ApiRequest, url: &str) -> Result<(u16, String), ApiError> {
        use futures::future::{Either, select};
        use gloo_net::http::Request;

        let mut builder = match request.method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        }
        .header("Accept", "application/json");
        if let Some(auth) = bearer_value(self.session.token().as_deref()) {
            builder = builder.header("Authorization", &auth);
        }

        let built = match &request.body {
            Body::Empty => builder.build(),
            Body::Json(value) => builder.json(value),
            Body::Form(encoded) => builder
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(encoded.clone()),
        }
        .map_err(|e| {
            log::error!("failed to build request for {url}: {e}");
            ApiError::network()
        })?;

        let timeout_ms = u32::try_from(self.config.request_timeout.as_millis()).unwrap_or(u32::MAX);
        let send = Box::pin(built.send());
        let timeout = Box::pin(gloo_timers::future::TimeoutFuture::new(timeout_ms));
        let response = match select(send, timeout).await {
            Either::Left((result, _)) => result.map_err(|e| {
                log::warn!("network failure for {url}: {e}");
                ApiError::network()
            })?,
            Either::Right(((), _)) => {
                log::warn!("request timed out after {timeout_ms}ms: {url}");
                return Err(ApiError::timeout());
            }
        };

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok((status, body))
    }
}
