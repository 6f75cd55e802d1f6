//! Login page: email + password against the auth service.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::config::HOME_PATH;
use crate::net::http::ApiClient;
use crate::state::liveness::Liveness;

pub const EMPTY_FIELDS_MESSAGE: &str = "Enter both email and password.";

/// Trimmed email and raw password, or the empty-field message.
///
/// # Errors
///
/// Returns `EMPTY_FIELDS_MESSAGE` when either field is blank.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(EMPTY_FIELDS_MESSAGE);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = api.session();
    let liveness = Liveness::for_component();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(fields) => fields,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        let api = api.clone();
        let navigate = navigate.clone();
        liveness.spawn_guarded(
            async move { session.login(&api, &email_value, &password_value).await },
            move |result| match result {
                Ok(_) => navigate(HOME_PATH, NavigateOptions::default()),
                Err(err) => {
                    error.set(Some(err.to_string()));
                    busy.set(false);
                }
            },
        );
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"HealthSpace"</h1>
                <p class="auth-card__subtitle">"Sign in to your account"</p>
                <ErrorBanner message=error />
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="form-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="form-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "No account yet? "
                    <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
