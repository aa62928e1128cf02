//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `RwSignal<AuthState>`. Route guards read it to decide
//! between placeholder, redirect, access-denied and content; the login page
//! and the layout's sign-out button write it through [`sign_in`] and
//! [`sign_out`].
//!
//! ERROR HANDLING
//! ==============
//! A failed `/me` request is recorded in `error` and logged, and the user is
//! treated as signed out. Login failures are returned to the caller so the
//! form can show the backend's message.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api::{self, ApiError, Session};
use crate::net::types::{Role, User};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    /// `true` until the first `/me` answer arrives.
    pub loading: bool,
    pub error: Option<ApiError>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true, error: None }
    }
}

impl AuthState {
    /// Fold a `/me` result into the state and finish loading.
    pub fn apply_session(&mut self, result: Result<Session, ApiError>) {
        self.loading = false;
        match result {
            Ok(Session::Authenticated(user)) => {
                self.user = Some(user);
                self.error = None;
            }
            Ok(Session::Unauthenticated) => {
                self.user = None;
                self.error = None;
            }
            Err(err) => {
                self.user = None;
                self.error = Some(err);
            }
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }
}

/// Ask the backend who is signed in and record the answer. Browser only; the
/// server render keeps the initial loading state.
pub fn load_session(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = api::fetch_current_user().await;
        if let Err(err) = &result {
            leptos::logging::warn!("session lookup failed: {err}");
        }
        auth.update(|state| state.apply_session(result));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = auth;
}

/// Submit credentials, then refetch `/me` so the state holds the backend's
/// canonical user record.
///
/// # Errors
///
/// Returns the login failure unchanged; a failed refetch falls back to the
/// user returned by the login call.
pub async fn sign_in(auth: RwSignal<AuthState>, email: &str, password: &str) -> Result<User, ApiError> {
    let logged_in = api::login(email, password).await?;
    let user = match api::fetch_current_user().await {
        Ok(Session::Authenticated(user)) => user,
        Ok(Session::Unauthenticated) => logged_in,
        Err(err) => {
            leptos::logging::warn!("refetch after login failed: {err}");
            logged_in
        }
    };
    auth.update(|state| state.apply_session(Ok(Session::Authenticated(user.clone()))));
    Ok(user)
}

/// End the server session and forget the local user, whatever the backend says.
pub async fn sign_out(auth: RwSignal<AuthState>) {
    if let Err(err) = api::logout().await {
        leptos::logging::warn!("logout request failed: {err}");
    }
    auth.update(|state| {
        state.user = None;
        state.loading = false;
    });
}
