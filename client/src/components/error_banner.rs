//! Inline error banner with an optional retry action.

use leptos::prelude::*;

/// Shows `message` when present. `on_retry` adds a "Try Again" button.
#[component]
pub fn ErrorBanner(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="error-banner" role="alert">
                <strong class="error-banner__title">"Error! "</strong>
                <span class="error-banner__message">{move || message.get().unwrap_or_default()}</span>
                {on_retry
                    .map(|retry| {
                        view! {
                            <button class="btn error-banner__retry" on:click=move |_| retry.run(())>
                                "Try Again"
                            </button>
                        }
                    })}
            </div>
        </Show>
    }
}
