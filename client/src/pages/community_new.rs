//! Create-community form.

#[cfg(test)]
#[path = "community_new_test.rs"]
mod community_new_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::components::protected::Protected;
use crate::net::http::ApiClient;
use crate::net::types::CommunityCreate;
use crate::state::liveness::Liveness;

pub const MAX_NAME_CHARS: usize = 100;
pub const MAX_DESCRIPTION_CHARS: usize = 1000;
pub const NAME_REQUIRED: &str = "Community name is required";
pub const NAME_TOO_LONG: &str = "Community name must be at most 100 characters";
pub const DESCRIPTION_TOO_LONG: &str = "Description must be at most 1000 characters";

/// Validate the form into a create request. Limits count characters, not
/// bytes; a blank description is sent as absent.
///
/// # Errors
///
/// Returns the message for the first violated rule.
pub fn build_community_create(
    name: &str,
    description: &str,
    is_private: bool,
) -> Result<CommunityCreate, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(NAME_REQUIRED);
    }
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(NAME_TOO_LONG);
    }
    let description = description.trim();
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(DESCRIPTION_TOO_LONG);
    }
    Ok(CommunityCreate {
        name: name.to_owned(),
        description: (!description.is_empty()).then(|| description.to_owned()),
        is_private,
    })
}

#[component]
pub fn CommunityNewPage() -> impl IntoView {
    view! {
        <Protected>
            <CommunityNew />
        </Protected>
    }
}

#[component]
fn CommunityNew() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let liveness = Liveness::for_component();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let is_private = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let data = match build_community_create(&name.get(), &description.get(), is_private.get()) {
            Ok(data) => data,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        let api = api.clone();
        let navigate = navigate.clone();
        liveness.spawn_guarded(async move { crate::net::communities::create(&api, &data).await }, move |result| {
            match result {
                Ok(community) => navigate(&format!("/communities/{}", community.slug), NavigateOptions::default()),
                Err(err) => {
                    error.set(Some(err.to_string()));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="form-page">
            <h1>"Create a Community"</h1>
            <ErrorBanner message=error />
            <form class="community-form" on:submit=on_submit>
                <label class="form-field">
                    <span class="form-field__label">"Name"</span>
                    <input
                        class="form-input"
                        type="text"
                        maxlength="100"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span class="form-field__label">"Description"</span>
                    <textarea
                        class="form-input"
                        rows="4"
                        maxlength="1000"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                    <span class="form-field__hint">
                        {move || format!("{}/{MAX_DESCRIPTION_CHARS}", description.get().chars().count())}
                    </span>
                </label>
                <label class="form-check">
                    <input
                        type="checkbox"
                        prop:checked=move || is_private.get()
                        on:change=move |ev| is_private.set(event_target_checked(&ev))
                    />
                    "Private community"
                </label>
                <div class="form-actions">
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating..." } else { "Create Community" }}
                    </button>
                    <a class="btn" href="/communities">
                        "Cancel"
                    </a>
                </div>
            </form>
        </div>
    }
}
