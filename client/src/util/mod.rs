//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers) and
//! the session lifecycle from page and component logic to improve reuse and
//! testability.

pub mod auth;
pub mod dark_mode;
pub mod route_gate;
pub mod session_store;
pub mod timer;
