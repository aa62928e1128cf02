//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the pooled HTTP client used to reach the backend and the backend's
//! base URL. The server keeps no domain state of its own.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{BACKEND_CONNECT_TIMEOUT_SECS, ServerConfig};

/// Shared application state. Clone is required by Axum; fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub backend_url: Arc<str>,
}

impl AppState {
    /// # Errors
    ///
    /// Returns the client build error (TLS backend initialisation).
    pub fn new(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.backend_timeout_secs))
            .connect_timeout(Duration::from_secs(BACKEND_CONNECT_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { http, backend_url: Arc::from(config.backend_url.as_str()) })
    }
}
