//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: it loads data through the
//! services on mount, keeps loading/error state in a `ListState` or
//! `ItemState` signal, and discards late results through `Liveness`.
//! Rendering details are delegated to `components`.
//!
//! Protected pages are split into a thin route component that wraps an inner
//! view in `Protected`, so the inner view only mounts once a session exists.

pub mod communities;
pub mod community_detail;
pub mod community_new;
pub mod dashboard;
pub mod login;
pub mod my_posts;
pub mod not_found;
pub(crate) mod post_form;
pub mod post_new;
pub mod posts;
pub mod profile;
pub mod register;
