use super::*;

fn user(role: Role) -> User {
    User {
        id: "u-1".to_owned(),
        email: "sara@example.com".to_owned(),
        first_name: Some("Sara".to_owned()),
        last_name: None,
        role,
        tenant_id: "t-1".to_owned(),
        department_id: None,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn auth_state_starts_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(state.error.is_none());
    assert!(!state.is_authenticated());
}

// =============================================================
// apply_session
// =============================================================

#[test]
fn authenticated_session_sets_user_and_role() {
    let mut state = AuthState::default();
    state.apply_session(Ok(Session::Authenticated(user(Role::Manager))));
    assert!(!state.loading);
    assert!(state.is_authenticated());
    assert_eq!(state.role(), Some(Role::Manager));
}

#[test]
fn unauthenticated_session_clears_user() {
    let mut state = AuthState { user: Some(user(Role::Employee)), loading: false, error: None };
    state.apply_session(Ok(Session::Unauthenticated));
    assert!(!state.loading);
    assert!(state.user.is_none());
    assert!(state.error.is_none());
}

#[test]
fn failed_lookup_records_error_and_signs_out() {
    let mut state = AuthState::default();
    state.apply_session(Err(ApiError::Status(500)));
    assert!(!state.loading);
    assert!(state.user.is_none());
    assert_eq!(state.error, Some(ApiError::Status(500)));
}

#[test]
fn successful_lookup_clears_previous_error() {
    let mut state = AuthState::default();
    state.apply_session(Err(ApiError::Network("offline".to_owned())));
    state.apply_session(Ok(Session::Authenticated(user(Role::Foreman))));
    assert!(state.error.is_none());
    assert_eq!(state.role(), Some(Role::Foreman));
}

// =============================================================
// Flows outside the browser
// =============================================================

#[test]
fn sign_in_without_browser_reports_unavailable() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = RwSignal::new(AuthState::default());
        let result = block_on(sign_in(auth, "a@b.com", "pw"));
        assert_eq!(result, Err(ApiError::Unavailable));
        assert!(auth.get_untracked().loading);
    });
}

#[test]
fn sign_out_clears_user_even_when_request_fails() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = RwSignal::new(AuthState { user: Some(user(Role::Administrator)), loading: false, error: None });
        block_on(sign_out(auth));
        assert!(auth.get_untracked().user.is_none());
    });
}

/// Drive a future that never actually suspends.
fn block_on<F: std::future::Future>(future: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut future = pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    match future.as_mut().poll(&mut cx) {
        Poll::Ready(output) => output,
        Poll::Pending => panic!("future suspended"),
    }
}
