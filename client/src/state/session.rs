//! Session store for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is the single owner of auth state. It is provided once as a
//! Leptos context by `App`, hydrated from `localStorage` after mount, and
//! written only by login, register, logout and the HTTP layer's 401 policy.
//! Services read the bearer token from here and never touch storage.
//!
//! DESIGN
//! ======
//! `SessionState` holds the plain data and all persistence rules so they can
//! be unit-tested against in-memory storage. A user without a token (or a
//! token without a user) is never observable: adoption writes both, clearing
//! removes both, and restore drops a half-present pair.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::config::{TOKEN_KEY, USER_KEY};
use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::{AuthResponse, RegisterData, User};
use crate::util::storage::{KeyValueStorage, LocalStorage, load_json, save_json};

/// Current user and bearer token.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    /// Set once persisted state has been read. Stays `false` during SSR so
    /// route guards wait instead of redirecting.
    pub ready: bool,
}

impl SessionState {
    /// A session exists only when both the user and the token are present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// Load the persisted session from `storage`.
    pub fn restore(storage: &impl KeyValueStorage) -> Self {
        let token = storage.get_item(TOKEN_KEY).filter(|token| !token.trim().is_empty());
        let user = load_json::<User>(storage, USER_KEY);
        match (user, token) {
            (Some(user), Some(token)) => Self { user: Some(user), token: Some(token), ready: true },
            _ => {
                storage.remove_item(TOKEN_KEY);
                storage.remove_item(USER_KEY);
                Self { user: None, token: None, ready: true }
            }
        }
    }

    /// Replace the session with a fresh login/register response and persist it.
    pub fn adopt(&mut self, auth: AuthResponse, storage: &impl KeyValueStorage) {
        storage.set_item(TOKEN_KEY, &auth.access_token);
        save_json(storage, USER_KEY, &auth.user);
        self.user = Some(auth.user);
        self.token = Some(auth.access_token);
        self.ready = true;
    }

    /// Drop the session from memory and storage.
    pub fn clear(&mut self, storage: &impl KeyValueStorage) {
        storage.remove_item(TOKEN_KEY);
        storage.remove_item(USER_KEY);
        self.user = None;
        self.token = None;
    }
}

/// Injectable session context shared by every page.
#[derive(Clone, Copy, Debug)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self { state: RwSignal::new(SessionState::default()) }
    }

    /// Hydrate from `localStorage`. Call once in the browser after mount.
    pub fn init(&self) {
        let restored = SessionState::restore(&LocalStorage);
        #[cfg(feature = "hydrate")]
        log::debug!("session restored (authenticated: {})", restored.is_authenticated());
        self.state.set(restored);
    }

    /// Reactive snapshot of the whole session.
    pub fn get(&self) -> SessionState {
        self.state.get()
    }

    /// Reactive current user.
    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }

    /// Whether persisted state has been read yet.
    pub fn is_ready(&self) -> bool {
        self.state.with(|s| s.ready)
    }

    /// Bearer token for outgoing requests. Not tracked reactively.
    pub fn token(&self) -> Option<String> {
        self.state.with_untracked(|s| s.token.clone())
    }

    /// Log in and adopt the returned session.
    ///
    /// # Errors
    ///
    /// Returns the normalized auth error; the session is left unchanged.
    pub async fn login(&self, api: &ApiClient, email: &str, password: &str) -> Result<User, ApiError> {
        let auth = crate::net::auth::login(api, email, password).await?;
        Ok(self.adopt(api, auth))
    }

    /// Register a new account and adopt the returned session.
    ///
    /// # Errors
    ///
    /// Returns the normalized registration error; the session is left unchanged.
    pub async fn register(&self, api: &ApiClient, data: &RegisterData) -> Result<User, ApiError> {
        let auth = crate::net::auth::register(api, data).await?;
        Ok(self.adopt(api, auth))
    }

    /// Client-side logout: clears persisted state only.
    pub fn logout(&self) {
        #[cfg(feature = "hydrate")]
        log::info!("logging out");
        self.clear();
    }

    /// Teardown used by logout and by the 401 policy.
    pub fn clear(&self) {
        self.state.update(|s| s.clear(&LocalStorage));
    }

    /// Store a fresh login/register response and re-arm the 401 guard.
    pub(crate) fn adopt(&self, api: &ApiClient, auth: AuthResponse) -> User {
        let user = auth.user.clone();
        self.state.update(|s| s.adopt(auth, &LocalStorage));
        api.unauthorized_guard().rearm();
        user
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
