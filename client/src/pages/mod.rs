//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Pages are only mounted through the shell's route gate.

pub mod login;
pub mod profile;
pub mod rooms;
