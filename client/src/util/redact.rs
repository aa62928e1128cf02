//! Masking of secret-looking integration settings before display.

#[cfg(test)]
#[path = "redact_test.rs"]
mod redact_test;

use std::collections::BTreeMap;

pub const REDACTED: &str = "***REDACTED***";

const SENSITIVE_MARKERS: [&str; 5] = ["password", "token", "api_key", "secret", "credentials"];

/// True when a config key names something that must not be shown.
#[must_use]
pub fn is_sensitive(key: &str) -> bool {
    let key = key.to_ascii_lowercase();
    SENSITIVE_MARKERS.iter().any(|marker| key.contains(marker))
}

/// Config entries in key order with sensitive values masked.
#[must_use]
pub fn redacted_entries(config: &BTreeMap<String, String>) -> Vec<(String, String)> {
    config
        .iter()
        .map(|(key, value)| {
            let shown = if is_sensitive(key) { REDACTED.to_owned() } else { value.clone() };
            (key.clone(), shown)
        })
        .collect()
}
