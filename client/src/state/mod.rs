//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `login`, `theme`, `feed`) so
//! individual components can depend on small focused models. Each is plain
//! data wrapped in an `RwSignal` and provided via context by the shell.

pub mod feed;
pub mod login;
pub mod session;
pub mod theme;
