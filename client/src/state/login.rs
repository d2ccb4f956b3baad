//! Login form state machine.
//!
//! ```text
//! Idle --submit--> Submitting --200--> Succeeded --delay--> (session Authenticated)
//!                      |
//!                      +--error--> Failed --submit--> Submitting
//! ```
//!
//! The machine is plain data; the login page owns the async call and the
//! delay timer and feeds results back through [`LoginFlow::finish`].

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::time::Duration;

use crate::net::api::ApiError;
use crate::net::types::LoginRequest;

/// Cosmetic pause between a successful login and entering the app.
pub const POST_LOGIN_DELAY: Duration = Duration::from_millis(2800);

/// Generic failure text; bad credentials and outages look the same.
pub const LOGIN_ERROR_MESSAGE: &str = "COULD NOT ACCESS.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Snapshot of the form taken when a submission starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginAttempt {
    pub username: String,
    pub invitation_code: String,
}

impl LoginAttempt {
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            username: self.username.clone(),
            invitation_code: self.invitation_code.clone(),
        }
    }
}

/// Form fields plus the status of the current submission cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFlow {
    pub username: String,
    pub invitation_code: String,
    pub status: LoginStatus,
}

impl LoginFlow {
    /// Start a submission, returning the attempt to send.
    ///
    /// Returns `None` while a request is already in flight or after success,
    /// so rapid double submits collapse into one request. Field contents are
    /// sent as-is, including empty strings.
    pub fn begin_submit(&mut self) -> Option<LoginAttempt> {
        if matches!(self.status, LoginStatus::Submitting | LoginStatus::Succeeded) {
            return None;
        }
        self.status = LoginStatus::Submitting;
        Some(LoginAttempt {
            username: self.username.clone(),
            invitation_code: self.invitation_code.clone(),
        })
    }

    /// Record the result of the in-flight submission.
    ///
    /// Returns the delay to wait before entering the app on success, `None`
    /// on failure or when no submission was in flight.
    pub fn finish(&mut self, result: &Result<(), ApiError>) -> Option<Duration> {
        if self.status != LoginStatus::Submitting {
            return None;
        }
        match result {
            Ok(()) => {
                self.status = LoginStatus::Succeeded;
                Some(POST_LOGIN_DELAY)
            }
            Err(e) => {
                log::warn!("login failed: {e}");
                self.status = LoginStatus::Failed;
                None
            }
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status == LoginStatus::Submitting
    }

    pub fn show_error(&self) -> bool {
        self.status == LoginStatus::Failed
    }

    /// Logo animation runs for the whole post-login delay.
    pub fn animate_logo(&self) -> bool {
        self.status == LoginStatus::Succeeded
    }
}
