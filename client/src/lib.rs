//! # client
//!
//! Leptos + WASM frontend for ravekidd, a small network for sharing audio
//! links across themed rooms.
//!
//! The interesting part is the session core: the token store
//! (`util::session_store`), startup validation and login/logout
//! (`util::auth`), the login state machine (`state::login`), and the pure
//! route gate (`util::route_gate`). Pages and components are thin views over
//! that state.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
