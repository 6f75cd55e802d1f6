//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the only state shared across pages. `view_state`,
//! `liveness` and `unauthorized` are small building blocks pages and the
//! HTTP layer compose for their own lifecycles.

pub mod liveness;
pub mod session;
pub mod unauthorized;
pub mod view_state;
