//! Profile page: the session user's account details.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::protected::Protected;
use crate::net::http::ApiClient;
use crate::net::types::User;

/// `(label, value)` rows rendered in the details list.
pub fn profile_rows(user: &User) -> Vec<(&'static str, String)> {
    vec![
        ("Name", user.name.clone().filter(|name| !name.trim().is_empty()).unwrap_or_else(|| "Not set".to_owned())),
        ("Email", user.email.clone()),
        ("User ID", user.id.to_string()),
        ("Status", if user.is_active { "Active" } else { "Inactive" }.to_owned()),
    ]
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <Protected>
            <Profile />
        </Protected>
    }
}

#[component]
fn Profile() -> impl IntoView {
    let session = expect_context::<ApiClient>().session();

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            {move || {
                session
                    .user()
                    .map(|user| {
                        view! {
                            <h2 class="profile-page__name">{user.display_name().to_owned()}</h2>
                            <dl class="profile-page__details">
                                {profile_rows(&user)
                                    .into_iter()
                                    .map(|(label, value)| {
                                        view! {
                                            <dt>{label}</dt>
                                            <dd>{value}</dd>
                                        }
                                    })
                                    .collect_view()}
                            </dl>
                        }
                    })
            }}
        </div>
    }
}
