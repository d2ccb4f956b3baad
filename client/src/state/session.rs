//! Session state derived from the stored credential.
//!
//! DESIGN
//! ======
//! The state is never persisted. It starts as `Validating`, is resolved once
//! by the startup check, and afterwards only moves on login success or
//! logout. All movement goes through [`SessionState::apply`] so no other code
//! path can flip it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Client-side authentication status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SessionState {
    Unauthenticated,
    /// Startup check in flight.
    #[default]
    Validating,
    Authenticated,
}

/// The only triggers that move [`SessionState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// Startup validation finished with the given verdict.
    Validated(bool),
    /// The post-login delay elapsed after a successful login.
    LoginCompleted,
    LoggedOut,
}

impl SessionState {
    pub fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated)
    }

    /// Next state after `event`.
    ///
    /// A validation verdict is only honored while `Validating`; a late verdict
    /// never overrides a login or logout that happened in the meantime.
    #[must_use]
    pub fn apply(self, event: SessionEvent) -> Self {
        match (self, event) {
            (Self::Validating, SessionEvent::Validated(true)) => Self::Authenticated,
            (Self::Validating, SessionEvent::Validated(false)) => Self::Unauthenticated,
            (state, SessionEvent::Validated(_)) => state,
            (_, SessionEvent::LoginCompleted) => Self::Authenticated,
            (_, SessionEvent::LoggedOut) => Self::Unauthenticated,
        }
    }

    /// Apply `event` in place, logging the transition.
    pub fn transition(&mut self, event: SessionEvent) {
        let next = self.apply(event);
        if next != *self {
            log::info!("session {self:?} -> {next:?} ({event:?})");
        }
        *self = next;
    }
}
