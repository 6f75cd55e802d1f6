//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one shared context, the `ApiClient`, which carries the
//! `SessionStore` and the unauthorized-redirect guard. The persisted session
//! is restored after mount so the server render and the first client render
//! agree.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::config::{ClientConfig, HOME_PATH};
use crate::net::http::ApiClient;
use crate::pages::{
    communities::CommunitiesPage, community_detail::CommunityDetailPage, community_new::CommunityNewPage,
    dashboard::DashboardPage, login::LoginPage, my_posts::MyPostsPage, not_found::NotFoundPage,
    post_new::PostNewPage, posts::PostsPage, profile::ProfilePage, register::RegisterPage,
};
use crate::state::session::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new();
    let api = ApiClient::new(ClientConfig::from_build_env(), session);
    provide_context(api);

    Effect::new(move || session.init());

    view! {
        <Stylesheet id="leptos" href="/pkg/healthspace.css"/>
        <Title text="HealthSpace"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=HOME_PATH/> }/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("communities") view=CommunitiesPage/>
                    <Route path=(StaticSegment("communities"), StaticSegment("new")) view=CommunityNewPage/>
                    <Route path=(StaticSegment("communities"), ParamSegment("slug")) view=CommunityDetailPage/>
                    <Route path=StaticSegment("posts") view=PostsPage/>
                    <Route path=(StaticSegment("posts"), StaticSegment("create")) view=PostNewPage/>
                    <Route path=(StaticSegment("posts"), StaticSegment("my")) view=MyPostsPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </Routes>
            </main>
        </Router>
    }
}
