//! REST API helpers for communicating with the TrainFlow backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since the
//! session cookie only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! `/me` distinguishes "no session" (`Ok(Session::Unauthenticated)`) from a
//! failed request (`Err`). No call retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
use super::types::{Notification, User};

pub const ME_ENDPOINT: &str = "/api/v1/users/me";
pub const LOGIN_ENDPOINT: &str = "/api/v1/users/login";
pub const LOGOUT_ENDPOINT: &str = "/api/v1/users/logout";
pub const NOTIFICATIONS_ENDPOINT: &str = "/api/notifications";

/// Failure modes shared by every REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {0}")]
    Status(u16),
    /// The server refused the request and explained why.
    #[error("{detail}")]
    Rejected { status: u16, detail: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available during server rendering")]
    Unavailable,
}

/// Outcome of asking the backend who is signed in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Session {
    Authenticated(User),
    Unauthenticated,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MeOutcome {
    User,
    Unauthenticated,
    Failed,
}

#[cfg(any(test, feature = "hydrate"))]
fn classify_me_status(status: u16) -> MeOutcome {
    match status {
        200..=299 => MeOutcome::User,
        401 | 403 => MeOutcome::Unauthenticated,
        _ => MeOutcome::Failed,
    }
}

/// Build the error for a rejected login from the response status and body.
#[cfg(any(test, feature = "hydrate"))]
fn login_rejection(status: u16, body: &str) -> ApiError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message())
        .unwrap_or_else(|| format!("Login failed (status {status})"));
    ApiError::Rejected { status, detail }
}

#[cfg(feature = "hydrate")]
fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
fn decode(err: gloo_net::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

/// Fetch the currently authenticated user from `GET /api/v1/users/me`.
///
/// # Errors
///
/// Returns an error on transport failure, an unexpected status, or an
/// undecodable body. A 401/403 is not an error.
pub async fn fetch_current_user() -> Result<Session, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(ME_ENDPOINT).send().await.map_err(network)?;
        match classify_me_status(resp.status()) {
            MeOutcome::User => resp.json::<User>().await.map(Session::Authenticated).map_err(decode),
            MeOutcome::Unauthenticated => Ok(Session::Unauthenticated),
            MeOutcome::Failed => Err(ApiError::Status(resp.status())),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Submit credentials to `POST /api/v1/users/login`.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] carrying the server's `detail` message when
/// the credentials are refused, or a transport/decode error.
pub async fn login(email: &str, password: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::{LoginRequest, LoginResponse};

        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&LoginRequest { email, password })
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(login_rejection(status, &body));
        }
        let body: LoginResponse = resp.json().await.map_err(decode)?;
        Ok(User::from(body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Clear the server session via `POST /api/v1/users/logout`.
///
/// # Errors
///
/// Returns an error if the request fails or the server responds non-OK.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGOUT_ENDPOINT).send().await.map_err(network)?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch the current user's notifications from `GET /api/notifications`.
///
/// # Errors
///
/// Returns an error on transport failure, a non-OK status, or a bad body.
pub async fn fetch_notifications() -> Result<Vec<Notification>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(NOTIFICATIONS_ENDPOINT).send().await.map_err(network)?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<Vec<Notification>>().await.map_err(decode)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
