//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by `App` above the router outlet. Link set depends on
//! whether a session exists; logout clears the session and leaves for the
//! login screen.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::net::http::ApiClient;

/// `(href, label)` pairs for signed-in users.
pub const MEMBER_LINKS: &[(&str, &str)] = &[
    ("/dashboard", "Dashboard"),
    ("/communities", "Communities"),
    ("/posts", "Posts"),
    ("/posts/my", "My Posts"),
    ("/profile", "Profile"),
];

/// `(href, label)` pairs for anonymous visitors.
pub const GUEST_LINKS: &[(&str, &str)] = &[("/login", "Login"), ("/register", "Register")];

pub fn nav_links(authenticated: bool) -> &'static [(&'static str, &'static str)] {
    if authenticated { MEMBER_LINKS } else { GUEST_LINKS }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<ApiClient>().session();

    let on_logout = move |_| {
        session.logout();
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(crate::config::LOGIN_PATH);
            }
        }
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">
                "HealthSpace"
            </a>
            <div class="navbar__links">
                {move || {
                    nav_links(session.is_authenticated())
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <a href=*href class="navbar__link">
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <Show when=move || session.is_authenticated()>
                <div class="navbar__session">
                    <span class="navbar__user">
                        {move || session.user().map(|user| user.display_name().to_owned()).unwrap_or_default()}
                    </span>
                    <button class="btn navbar__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </div>
            </Show>
        </nav>
    }
}
