//! Registration page.
//!
//! All local validation failures are collected and shown together; the
//! request is only sent once the list is empty.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::HOME_PATH;
use crate::net::http::ApiClient;
use crate::net::types::RegisterData;
use crate::state::liveness::Liveness;
use crate::util::validation::{validate_email, validate_password};

pub const NAME_REQUIRED: &str = "Name is required";
pub const INVALID_EMAIL: &str = "Invalid email address";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

/// Every local validation failure, in display order.
pub fn collect_register_errors(name: &str, email: &str, password: &str, confirm: &str) -> Vec<&'static str> {
    let mut errors = Vec::new();
    if name.trim().is_empty() {
        errors.push(NAME_REQUIRED);
    }
    if !validate_email(email) {
        errors.push(INVALID_EMAIL);
    }
    errors.extend(validate_password(password).errors);
    if password != confirm {
        errors.push(PASSWORDS_DO_NOT_MATCH);
    }
    errors
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = api.session();
    let liveness = Liveness::for_component();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<String>::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let local = collect_register_errors(&name.get(), &email.get(), &password.get(), &confirm.get());
        if !local.is_empty() {
            errors.set(local.into_iter().map(str::to_owned).collect());
            return;
        }
        busy.set(true);
        errors.set(Vec::new());

        let data = RegisterData { email: email.get(), password: password.get(), name: name.get().trim().to_owned() };
        let api = api.clone();
        let navigate = navigate.clone();
        liveness.spawn_guarded(async move { session.register(&api, &data).await }, move |result| match result {
            Ok(_) => navigate(HOME_PATH, NavigateOptions::default()),
            Err(err) => {
                errors.set(vec![err.to_string()]);
                busy.set(false);
            }
        });
    };

    let field = move |label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <label class="form-field">
                <span class="form-field__label">{label}</span>
                <input
                    class="form-input"
                    type=kind
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <Show when=move || !errors.get().is_empty()>
                    <div class="error-banner" role="alert">
                        <ul class="error-banner__list">
                            {move || errors.get().into_iter().map(|message| view! { <li>{message}</li> }).collect_view()}
                        </ul>
                    </div>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    {field("Name", "text", name)}
                    {field("Email", "email", email)}
                    {field("Password", "password", password)}
                    {field("Confirm Password", "password", confirm)}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
