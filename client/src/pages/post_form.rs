//! Post composer shared by the new-post page and community detail.
//!
//! DESIGN
//! ======
//! The form validates locally, submits through the post service, and hands
//! the created post to its owner via `on_created`. The owner decides what
//! happens next (prepend to a list, navigate away).

#[cfg(test)]
#[path = "post_form_test.rs"]
mod post_form_test;

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::net::http::ApiClient;
use crate::net::types::{Post, PostCreate};
use crate::state::liveness::Liveness;

pub const TITLE_REQUIRED: &str = "Title is required";
pub const CONTENT_REQUIRED: &str = "Content is required";

/// Trim and validate composer fields into a create request.
///
/// # Errors
///
/// Returns the message for the first empty required field.
pub fn build_post_create(
    title: &str,
    content: &str,
    is_announcement: bool,
    community_id: Option<i64>,
) -> Result<PostCreate, &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err(TITLE_REQUIRED);
    }
    let content = content.trim();
    if content.is_empty() {
        return Err(CONTENT_REQUIRED);
    }
    Ok(PostCreate { title: title.to_owned(), content: content.to_owned(), is_announcement, community_id })
}

#[component]
pub fn PostForm(
    on_created: Callback<Post>,
    #[prop(optional)] community_id: Option<i64>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let liveness = Liveness::for_component();
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let announcement = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let data = match build_post_create(&title.get(), &content.get(), announcement.get(), community_id) {
            Ok(data) => data,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        let api = api.clone();
        liveness.spawn_guarded(async move { crate::net::posts::create(&api, &data).await }, move |result| {
            busy.set(false);
            match result {
                Ok(post) => {
                    title.set(String::new());
                    content.set(String::new());
                    announcement.set(false);
                    on_created.run(post);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <form class="post-form" on:submit=on_submit>
            <ErrorBanner message=error />
            <label class="form-field">
                <span class="form-field__label">"Title"</span>
                <input
                    class="form-input"
                    type="text"
                    placeholder="Enter post title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </label>
            <label class="form-field">
                <span class="form-field__label">"Content"</span>
                <textarea
                    class="form-input"
                    rows="5"
                    placeholder="Write your post content here..."
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label class="form-check">
                <input
                    type="checkbox"
                    prop:checked=move || announcement.get()
                    on:change=move |ev| announcement.set(event_target_checked(&ev))
                />
                "Mark as announcement"
            </label>
            <div class="form-actions">
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Posting..." } else { "Create Post" }}
                </button>
                {on_cancel
                    .map(|cancel| {
                        view! {
                            <button class="btn" type="button" on:click=move |_| cancel.run(())>
                                "Cancel"
                            </button>
                        }
                    })}
            </div>
        </form>
    }
}
