//! Networking modules for the backend auth endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls behind the [`api::AuthApi`] seam and `types`
//! defines the wire schema plus the post records the feed renders.

pub mod api;
pub mod types;
