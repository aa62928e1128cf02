//! Server configuration parsed from environment variables.
//!
//! Variables
//! - `PORT`: listen port, default 3000
//! - `BACKEND_URL`: base URL of the TrainFlow API, default `http://127.0.0.1:8000`
//! - `BACKEND_TIMEOUT_SECS`: per-request upstream timeout, default 30

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;
pub const BACKEND_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("invalid BACKEND_URL: {0} (expected http:// or https://)")]
    InvalidBackendUrl(String),

    #[error("invalid BACKEND_TIMEOUT_SECS: {0}")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// No trailing slash.
    pub backend_url: String,
    pub backend_timeout_secs: u64,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first malformed variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup. Empty values count
    /// as unset.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first malformed variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let backend_url = get("BACKEND_URL").unwrap_or_else(|| DEFAULT_BACKEND_URL.to_owned());
        let backend_url = backend_url.trim_end_matches('/').to_owned();
        if !is_http_url(&backend_url) {
            return Err(ConfigError::InvalidBackendUrl(backend_url));
        }

        let backend_timeout_secs = match get("BACKEND_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => DEFAULT_BACKEND_TIMEOUT_SECS,
        };

        Ok(Self { port, backend_url, backend_timeout_secs })
    }
}

fn is_http_url(url: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|scheme| url.strip_prefix(scheme).is_some_and(|host| !host.is_empty()))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
