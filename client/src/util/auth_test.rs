use std::cell::RefCell;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::*;
use crate::net::types::LoginRequest;
use crate::state::login::{LoginFlow, LoginStatus, POST_LOGIN_DELAY};
use crate::util::session_store::MemorySessionStore;
use crate::util::timer::{Sleep, TimerGuard, run_after};

// =========================================================================
// MockApi
// =========================================================================

#[derive(Default)]
struct MockApi {
    login_result: Option<Result<String, ApiError>>,
    validate_result: Option<Result<(), ApiError>>,
    login_requests: Mutex<Vec<LoginRequest>>,
    validated_tokens: Mutex<Vec<String>>,
}

impl MockApi {
    fn login_returns(result: Result<String, ApiError>) -> Self {
        Self {
            login_result: Some(result),
            ..Self::default()
        }
    }

    fn validate_returns(result: Result<(), ApiError>) -> Self {
        Self {
            validate_result: Some(result),
            ..Self::default()
        }
    }

    fn validate_calls(&self) -> usize {
        self.validated_tokens.lock().unwrap().len()
    }
}

#[async_trait(?Send)]
impl AuthApi for MockApi {
    async fn login(&self, request: &LoginRequest) -> Result<String, ApiError> {
        self.login_requests.lock().unwrap().push(request.clone());
        self.login_result.clone().expect("unexpected login call")
    }

    async fn validate(&self, token: &str) -> Result<(), ApiError> {
        self.validated_tokens.lock().unwrap().push(token.to_owned());
        self.validate_result.clone().expect("unexpected validate call")
    }
}

#[derive(Default)]
struct RecordingSleep {
    calls: RefCell<Vec<Duration>>,
}

#[async_trait(?Send)]
impl Sleep for RecordingSleep {
    async fn sleep(&self, duration: Duration) {
        self.calls.borrow_mut().push(duration);
    }
}

fn attempt(username: &str, code: &str) -> LoginAttempt {
    LoginAttempt {
        username: username.to_owned(),
        invitation_code: code.to_owned(),
    }
}

// =========================================================================
// check_session
// =========================================================================

#[tokio::test]
async fn empty_store_is_unauthenticated_without_request() {
    let store = MemorySessionStore::default();
    let api = MockApi::default();
    assert_eq!(check_session(&store, &api).await, SessionState::Unauthenticated);
    assert_eq!(api.validate_calls(), 0);
}

#[tokio::test]
async fn accepted_token_authenticates() {
    let store = MemorySessionStore::with_token("tok-abc");
    let api = MockApi::validate_returns(Ok(()));
    assert_eq!(check_session(&store, &api).await, SessionState::Authenticated);
    assert_eq!(*api.validated_tokens.lock().unwrap(), vec!["tok-abc".to_owned()]);
}

#[tokio::test]
async fn rejected_token_unauthenticates_and_stays_stored() {
    let store = MemorySessionStore::with_token("tok-abc");
    let api = MockApi::validate_returns(Err(ApiError::Status(401)));
    assert_eq!(check_session(&store, &api).await, SessionState::Unauthenticated);
    assert_eq!(store.read().as_deref(), Some("tok-abc"));
}

#[tokio::test]
async fn transport_error_unauthenticates() {
    let store = MemorySessionStore::with_token("tok-abc");
    let api = MockApi::validate_returns(Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(check_session(&store, &api).await, SessionState::Unauthenticated);
    assert_eq!(api.validate_calls(), 1);
}

// =========================================================================
// submit_login
// =========================================================================

#[tokio::test]
async fn login_sends_invitation_code_as_password() {
    let store = MemorySessionStore::default();
    let api = MockApi::login_returns(Ok("tok-abc".to_owned()));
    submit_login(&store, &api, &attempt("rk01", "INV-42")).await.unwrap();
    let sent = api.login_requests.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].username, "rk01");
    assert_eq!(sent[0].invitation_code, "INV-42");
}

#[tokio::test]
async fn successful_login_stores_token_then_enters_after_delay() {
    let store = MemorySessionStore::default();
    let api = MockApi::login_returns(Ok("tok-abc".to_owned()));
    let mut flow = LoginFlow {
        username: "rk01".to_owned(),
        invitation_code: "INV-42".to_owned(),
        status: LoginStatus::Idle,
    };
    let mut session = SessionState::Unauthenticated;

    let pending = flow.begin_submit().unwrap();
    let result = submit_login(&store, &api, &pending).await;
    assert_eq!(store.read().as_deref(), Some("tok-abc"));

    let delay = flow.finish(&result).unwrap();
    assert_eq!(session, SessionState::Unauthenticated);

    let sleeper = RecordingSleep::default();
    let entered = run_after(&sleeper, delay, &TimerGuard::new(), || {
        session.transition(SessionEvent::LoginCompleted);
    })
    .await;
    assert!(entered);
    assert_eq!(*sleeper.calls.borrow(), vec![POST_LOGIN_DELAY]);
    assert_eq!(session, SessionState::Authenticated);
}

#[tokio::test]
async fn teardown_during_delay_keeps_session_unchanged() {
    let store = MemorySessionStore::default();
    let api = MockApi::login_returns(Ok("tok-abc".to_owned()));
    let mut flow = LoginFlow::default();
    let mut session = SessionState::Unauthenticated;

    let pending = flow.begin_submit().unwrap();
    let result = submit_login(&store, &api, &pending).await;
    let delay = flow.finish(&result).unwrap();

    let guard = TimerGuard::new();
    guard.cancel();
    let entered = run_after(&RecordingSleep::default(), delay, &guard, || {
        session.transition(SessionEvent::LoginCompleted);
    })
    .await;
    assert!(!entered);
    assert_eq!(session, SessionState::Unauthenticated);
    assert_eq!(store.read().as_deref(), Some("tok-abc"));
}

#[tokio::test]
async fn server_error_leaves_store_empty_and_flow_failed() {
    let store = MemorySessionStore::default();
    let api = MockApi::login_returns(Err(ApiError::Status(500)));
    let mut flow = LoginFlow::default();

    let pending = flow.begin_submit().unwrap();
    let result = submit_login(&store, &api, &pending).await;
    assert_eq!(result, Err(ApiError::Status(500)));
    assert_eq!(flow.finish(&result), None);
    assert_eq!(flow.status, LoginStatus::Failed);
    assert_eq!(store.read(), None);
}

#[tokio::test]
async fn failed_login_keeps_previous_token() {
    let store = MemorySessionStore::with_token("tok-old");
    let api = MockApi::login_returns(Err(ApiError::Transport("offline".to_owned())));
    assert!(submit_login(&store, &api, &attempt("rk01", "bad")).await.is_err());
    assert_eq!(store.read().as_deref(), Some("tok-old"));
}

// =========================================================================
// logout
// =========================================================================

#[test]
fn logout_clears_store_and_session() {
    let store = MemorySessionStore::with_token("tok-abc");
    let mut session = SessionState::Authenticated;
    logout(&store, &mut session);
    assert_eq!(store.read(), None);
    assert_eq!(session, SessionState::Unauthenticated);
}

#[test]
fn logout_twice_is_idempotent() {
    let store = MemorySessionStore::with_token("tok-abc");
    let mut session = SessionState::Authenticated;
    logout(&store, &mut session);
    logout(&store, &mut session);
    assert_eq!(store.read(), None);
    assert_eq!(session, SessionState::Unauthenticated);
}
