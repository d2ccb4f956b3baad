//! Session lifecycle operations: startup validation, login, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! These functions are the only code that touches both the token store and
//! the backend. Pages call them and translate the results into
//! `SessionState` / `LoginFlow` transitions; the route gate never sees a
//! token.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures degrade silently to `Unauthenticated`. A rejected
//! token is left in the store; the next reload validates it again.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::{ApiError, AuthApi};
use crate::state::login::LoginAttempt;
use crate::state::session::{SessionEvent, SessionState};
use crate::util::session_store::SessionStore;

/// Resolve the initial session state from the stored token.
///
/// No token means no request. Otherwise the token is checked once against
/// `/validate`; only a 200 yields `Authenticated`.
pub async fn check_session<S, A>(store: &S, api: &A) -> SessionState
where
    S: SessionStore + ?Sized,
    A: AuthApi + ?Sized,
{
    let Some(token) = store.read() else {
        log::debug!("no stored session token");
        return SessionState::Unauthenticated;
    };
    match api.validate(&token).await {
        Ok(()) => {
            log::info!("stored session token accepted");
            SessionState::Authenticated
        }
        Err(e) => {
            log::warn!("stored session token rejected: {e}");
            SessionState::Unauthenticated
        }
    }
}

/// Send one login attempt and persist the issued token on success.
///
/// The token is written before this returns, ahead of any post-login delay.
///
/// # Errors
///
/// Returns the [`ApiError`] from the backend call; the store is untouched.
pub async fn submit_login<S, A>(store: &S, api: &A, attempt: &LoginAttempt) -> Result<(), ApiError>
where
    S: SessionStore + ?Sized,
    A: AuthApi + ?Sized,
{
    let token = api.login(&attempt.to_request()).await?;
    store.write(&token);
    log::info!("login succeeded for {}", attempt.username);
    Ok(())
}

/// Discard the local session. No backend call is made.
pub fn logout<S>(store: &S, session: &mut SessionState)
where
    S: SessionStore + ?Sized,
{
    store.clear();
    session.transition(SessionEvent::LoggedOut);
}
