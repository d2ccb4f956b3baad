use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn session_starts_validating() {
    assert_eq!(SessionState::default(), SessionState::Validating);
}

#[test]
fn only_authenticated_counts_as_authenticated() {
    assert!(SessionState::Authenticated.is_authenticated());
    assert!(!SessionState::Validating.is_authenticated());
    assert!(!SessionState::Unauthenticated.is_authenticated());
}

// =============================================================
// Validation verdicts
// =============================================================

#[test]
fn valid_verdict_authenticates() {
    assert_eq!(
        SessionState::Validating.apply(SessionEvent::Validated(true)),
        SessionState::Authenticated
    );
}

#[test]
fn invalid_verdict_unauthenticates() {
    assert_eq!(
        SessionState::Validating.apply(SessionEvent::Validated(false)),
        SessionState::Unauthenticated
    );
}

#[test]
fn late_verdict_does_not_override_logout() {
    let state = SessionState::Validating.apply(SessionEvent::LoggedOut);
    assert_eq!(state.apply(SessionEvent::Validated(true)), SessionState::Unauthenticated);
}

#[test]
fn late_verdict_does_not_override_login() {
    let state = SessionState::Validating.apply(SessionEvent::LoginCompleted);
    assert_eq!(state.apply(SessionEvent::Validated(false)), SessionState::Authenticated);
}

// =============================================================
// Login / logout
// =============================================================

#[test]
fn login_completion_authenticates_from_any_state() {
    for state in [
        SessionState::Unauthenticated,
        SessionState::Validating,
        SessionState::Authenticated,
    ] {
        assert_eq!(state.apply(SessionEvent::LoginCompleted), SessionState::Authenticated);
    }
}

#[test]
fn logout_unauthenticates_from_any_state() {
    for state in [
        SessionState::Unauthenticated,
        SessionState::Validating,
        SessionState::Authenticated,
    ] {
        assert_eq!(state.apply(SessionEvent::LoggedOut), SessionState::Unauthenticated);
    }
}

#[test]
fn transition_mutates_in_place() {
    let mut state = SessionState::Authenticated;
    state.transition(SessionEvent::LoggedOut);
    assert_eq!(state, SessionState::Unauthenticated);
    state.transition(SessionEvent::LoggedOut);
    assert_eq!(state, SessionState::Unauthenticated);
}
