//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navigation, cards, error banners) and the
//! protected-route guard. They read the API handle from Leptos context and
//! report user actions back to pages through callbacks.

pub mod community_card;
pub mod error_banner;
pub mod navbar;
pub mod post_card;
pub mod protected;
