use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_applies_defaults() {
    let cfg = Config::from_lookup(lookup_from(&[("PUBLIC_API_URL", "http://localhost:8080/_api")])).unwrap();
    assert_eq!(cfg.public_api_url, "http://localhost:8080/_api");
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(
        cfg.timeouts,
        BackendTimeouts {
            request_secs: DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS,
        }
    );
    assert_eq!(cfg.demo_username, "demo");
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = Config::from_lookup(lookup_from(&[
        ("PUBLIC_API_URL", "https://api.example.test/_api/"),
        ("PORT", "8443"),
        ("BACKEND_REQUEST_TIMEOUT_SECS", "30"),
        ("BACKEND_CONNECT_TIMEOUT_SECS", " 2 "),
        ("DEMO_USERNAME", "guest"),
    ]))
    .unwrap();
    assert_eq!(cfg.public_api_url, "https://api.example.test/_api");
    assert_eq!(cfg.port, 8443);
    assert_eq!(cfg.timeouts, BackendTimeouts { request_secs: 30, connect_secs: 2 });
    assert_eq!(cfg.demo_username, "guest");
}

#[test]
fn from_lookup_requires_api_url() {
    let err = Config::from_lookup(lookup_from(&[("PORT", "3000")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("PUBLIC_API_URL"));
}

#[test]
fn from_lookup_rejects_blank_api_url() {
    let err = Config::from_lookup(lookup_from(&[("PUBLIC_API_URL", "  / ")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("PUBLIC_API_URL"));
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = Config::from_lookup(lookup_from(&[("PUBLIC_API_URL", "http://api"), ("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "PORT", value: "eighty".into() });
}

#[test]
fn from_lookup_blank_numeric_falls_back_to_default() {
    let cfg = Config::from_lookup(lookup_from(&[("PUBLIC_API_URL", "http://api"), ("PORT", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn api_url_joins_without_double_slash() {
    let cfg = Config::from_lookup(lookup_from(&[("PUBLIC_API_URL", "http://api/_api")])).unwrap();
    assert_eq!(cfg.api_url("auth/google"), "http://api/_api/auth/google");
    assert_eq!(cfg.api_url("/auth/logout"), "http://api/_api/auth/logout");
}
