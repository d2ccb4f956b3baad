//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render display chrome (navigation, post cards, the loading
//! splash) while reading/writing shared state from Leptos context providers.

pub mod create_post;
pub mod navigation_bar;
pub mod post_card;
pub mod progress_bar;
pub mod soundcloud_player;
pub mod theme_toggle;
