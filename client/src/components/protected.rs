//! Route guard for screens that need a signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps protected routes in `app.rs`. While the persisted session is still
//! being read it shows a loading line; once ready without a session it
//! replaces the current history entry with `/login`.

#[cfg(test)]
#[path = "protected_test.rs"]
mod protected_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::http::ApiClient;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

/// Render `children` only for an authenticated session.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<ApiClient>().session();
    install_unauth_redirect(session, use_navigate());

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=move || {
                view! {
                    <div class="page-status">
                        <p>{move || guard_status(&session.get())}</p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Placeholder text while the guard is not rendering its children.
pub fn guard_status(state: &SessionState) -> &'static str {
    if state.ready { "Redirecting to login..." } else { "Loading..." }
}
