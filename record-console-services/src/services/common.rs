//! Shared helpers for service implementations.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

// ============ HTTP Client ============

/// Default connect timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Create an HTTP client with the shared timeout configuration.
#[must_use]
pub fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}

// ============ Identifier extraction ============

/// Pull the `id` field out of a create-response body.
///
/// Services disagree on the type: the user directory echoes a string, the
/// product catalog a number. Both are rendered as a string; a missing or
/// empty id yields `None`.
#[must_use]
pub fn extract_id(value: &Value) -> Option<String> {
    match value.get("id") {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}
