//! Generic HTTP request plumbing.
//!
//! Each service builds its own `RequestBuilder` (URL, headers, body) and hands
//! it here for the parts that are identical everywhere: sending, logging, and
//! reading the response. Status interpretation stays with the caller because
//! the same status means different things on different paths (a 404 on
//! fetch-by-id is "not found"; on a listing it is a fault).
//!
//! Deliberately absent: retries, backoff, and in-flight de-duplication. A
//! failed call fails once and is reported once.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ServiceError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP helper function set.
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and body text.
    ///
    /// Transport failures are classified into [`ServiceError::Timeout`] and
    /// [`ServiceError::NetworkError`]. Any status the server managed to
    /// answer with is returned as-is, body included.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `service_name` - service identifier, for logs and errors
    /// * `method_name` - HTTP verb, for logs
    /// * `url` - request target, for logs
    pub async fn execute_request(
        request_builder: RequestBuilder,
        service_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ServiceError> {
        log::debug!("[{service_name}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ServiceError::Timeout {
                    service: service_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ServiceError::NetworkError {
                    service: service_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{service_name}] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ServiceError::NetworkError {
                service: service_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{service_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse a JSON response body.
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ServiceError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, service_name: &str) -> Result<T, ServiceError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{service_name}] JSON parse failed: {e}");
            log::error!(
                "[{service_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ServiceError::ParseError {
                service: service_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

/// Whether a status code counts as success (2xx).
#[must_use]
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- is_success ----

    #[test]
    fn success_range() {
        assert!(is_success(200));
        assert!(is_success(201));
        assert!(is_success(299));
    }

    #[test]
    fn failure_range() {
        assert!(!is_success(199));
        assert!(!is_success(301));
        assert!(!is_success(404));
        assert!(!is_success(500));
    }

    // ---- parse_json ----

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ServiceError> = HttpUtils::parse_json(r#"{"x":42}"#, "test");
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ServiceError> = HttpUtils::parse_json("not json", "test");
        assert!(
            matches!(&result, Err(ServiceError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_error_names_service() {
        let result: Result<i32, ServiceError> = HttpUtils::parse_json("{", "audit");
        let Err(e) = result else {
            panic!("expected Err");
        };
        assert_eq!(e.service(), "audit");
    }
}
