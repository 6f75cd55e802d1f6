//! New post page. Redirects to the user's posts once created.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::protected::Protected;
use crate::net::types::Post;
use crate::pages::post_form::PostForm;

pub const AFTER_CREATE_PATH: &str = "/posts/my";

#[component]
pub fn PostNewPage() -> impl IntoView {
    view! {
        <Protected>
            <PostNew />
        </Protected>
    }
}

#[component]
fn PostNew() -> impl IntoView {
    let navigate = use_navigate();
    let created = RwSignal::new(false);
    let cancelled = RwSignal::new(false);

    Effect::new(move || {
        if created.get() {
            navigate(AFTER_CREATE_PATH, NavigateOptions::default());
        } else if cancelled.get() {
            navigate("/posts", NavigateOptions::default());
        }
    });

    let on_created = Callback::new(move |_: Post| created.set(true));
    let on_cancel = Callback::new(move |()| cancelled.set(true));

    view! {
        <div class="form-page">
            <h1>"Create New Post"</h1>
            <PostForm on_created=on_created on_cancel=on_cancel />
        </div>
    }
}
