//! Networking modules for the HealthSpace REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns transport, auth headers and the 401 policy; `auth`,
//! `communities` and `posts` map one resource family each; `types` and
//! `error` define the shared wire schema and failure taxonomy.

pub mod auth;
pub mod communities;
pub mod error;
pub mod http;
pub mod posts;
pub mod types;
