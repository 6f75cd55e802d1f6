//! Fallback for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <a class="btn btn--primary" href="/">
                "Go Home"
            </a>
        </div>
    }
}
