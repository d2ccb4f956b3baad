//! Route gating: which view a path renders under the current session.
//!
//! `resolve` is a pure function of `(RoutePath, SessionState)`. It never sees
//! the token, and anything other than `Authenticated` counts as signed out.
//! Unknown paths never reach it; the router's fallback handles them.

#[cfg(test)]
#[path = "route_gate_test.rs"]
mod route_gate_test;

use crate::state::session::SessionState;

/// Client-side routes known to the gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoutePath {
    Login,
    Ambient,
    Main,
    Dark,
    Profile,
}

impl RoutePath {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Ambient => "/ambient",
            Self::Main => "/main",
            Self::Dark => "/dark",
            Self::Profile => "/profile",
        }
    }
}

/// Views the shell can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    Ambient,
    Main,
    Dark,
    Profile,
}

/// Gate decision for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RenderTarget {
    Render(View),
    Redirect(RoutePath),
}

/// Decide what `path` renders under `session`.
pub fn resolve(path: RoutePath, session: SessionState) -> RenderTarget {
    let authenticated = session.is_authenticated();
    match (path, authenticated) {
        (RoutePath::Login, true) => RenderTarget::Redirect(RoutePath::Main),
        (RoutePath::Login, false) => RenderTarget::Render(View::Login),
        (_, false) => RenderTarget::Redirect(RoutePath::Login),
        (RoutePath::Ambient, true) => RenderTarget::Render(View::Ambient),
        (RoutePath::Main, true) => RenderTarget::Render(View::Main),
        (RoutePath::Dark, true) => RenderTarget::Render(View::Dark),
        (RoutePath::Profile, true) => RenderTarget::Render(View::Profile),
    }
}
