//! HTTP transport for the orthodromy service.

use std::time::Duration;

use hyper::ext::ReasonPhrase;
use serde::Deserialize;

use crate::error::Result;

/// Address of the orthodromy service when it runs as a local Flask dev server.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

const BASE_URL_VAR: &str = "ORTHODROMY_BASE_URL";
const TIMEOUT_VAR: &str = "ORTHODROMY_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrthodromyConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for OrthodromyConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl OrthodromyConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Defaults overridden by `ORTHODROMY_BASE_URL` and `ORTHODROMY_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::default().overlay(|key| std::env::var(key).ok())
    }

    fn overlay(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(base_url) = lookup(BASE_URL_VAR) {
            self.base_url = base_url;
        }
        if let Some(timeout) = lookup(TIMEOUT_VAR).and_then(|raw| raw.trim().parse().ok()) {
            self.timeout_secs = timeout;
        }
        self
    }
}

/// Status and body of one GET against the service.
///
/// `body` is only filled in for success statuses.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs the GET for an encoded locator (path and query, no host).
pub trait Transport {
    fn get(&self, locator: &str) -> Result<TransportResponse>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    config: OrthodromyConfig,
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(config: OrthodromyConfig) -> std::result::Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &OrthodromyConfig {
        &self.config
    }
}

impl Transport for HttpTransport {
    fn get(&self, locator: &str) -> Result<TransportResponse> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), locator);
        let response = self.client.get(url).send()?;

        let status = response.status();
        let reason = reason_phrase(&response);

        let body = if status.is_success() {
            response.text()?
        } else {
            String::new()
        };

        Ok(TransportResponse {
            status: status.as_u16(),
            reason,
            body,
        })
    }
}

/// Status description as the server sent it. hyper only records the wire
/// phrase when it differs from the canonical one.
fn reason_phrase(response: &reqwest::blocking::Response) -> String {
    let status = response.status();
    response
        .extensions()
        .get::<ReasonPhrase>()
        .map(|phrase| String::from_utf8_lossy(phrase.as_bytes()).into_owned())
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| status.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = OrthodromyConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_overlay_replaces_set_values() {
        let config = OrthodromyConfig::default().overlay(lookup_from(&[
            (BASE_URL_VAR, "http://geo.internal:8080"),
            (TIMEOUT_VAR, " 3 "),
        ]));
        assert_eq!(config.base_url, "http://geo.internal:8080");
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn test_overlay_keeps_default_on_bad_timeout() {
        let config = OrthodromyConfig::default().overlay(lookup_from(&[(TIMEOUT_VAR, "soon")]));
        assert_eq!(config, OrthodromyConfig::default());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: OrthodromyConfig =
            serde_json::from_str(r#"{"base_url": "http://example.test"}"#).unwrap();
        assert_eq!(config.base_url, "http://example.test");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_success_range() {
        let response = |status| TransportResponse {
            status,
            reason: String::new(),
            body: String::new(),
        };
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(!response(199).is_success());
        assert!(!response(301).is_success());
        assert!(!response(404).is_success());
    }
}
