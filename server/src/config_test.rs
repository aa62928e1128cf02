use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(
        cfg,
        ServerConfig {
            port: DEFAULT_PORT,
            backend_url: DEFAULT_BACKEND_URL.to_owned(),
            backend_timeout_secs: DEFAULT_BACKEND_TIMEOUT_SECS,
        }
    );
}

#[test]
fn parses_overrides_and_trims_trailing_slash() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BACKEND_URL", "https://api.trainflow.test/"),
        ("BACKEND_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url, "https://api.trainflow.test");
    assert_eq!(cfg.backend_timeout_secs, 5);
}

#[test]
fn empty_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("BACKEND_URL", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
}

#[test]
fn rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("70000".to_owned()));
}

#[test]
fn rejects_non_http_backend() {
    let err = ServerConfig::from_lookup(lookup(&[("BACKEND_URL", "ftp://files.test")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBackendUrl(_)));
    let err = ServerConfig::from_lookup(lookup(&[("BACKEND_URL", "http://")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBackendUrl(_)));
}

#[test]
fn rejects_zero_or_garbage_timeout() {
    for raw in ["0", "soon"] {
        let err = ServerConfig::from_lookup(lookup(&[("BACKEND_TIMEOUT_SECS", raw)])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidTimeout(raw.to_owned()));
    }
}

#[test]
fn error_text_names_the_variable() {
    assert!(ConfigError::InvalidPort("x".into()).to_string().contains("PORT"));
    assert!(ConfigError::InvalidTimeout("x".into()).to_string().contains("BACKEND_TIMEOUT_SECS"));
}
