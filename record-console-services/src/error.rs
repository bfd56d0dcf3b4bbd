use serde::{Deserialize, Serialize};

/// Unified error type for all record service operations.
///
/// Each variant carries a `service` field identifying which remote service
/// produced the error, plus variant-specific context. All variants are
/// serializable for structured error reporting.
///
/// The taxonomy has two halves: transport failures that prevented a response
/// from arriving ([`NetworkError`](Self::NetworkError),
/// [`Timeout`](Self::Timeout)) and application-level rejections carried by a
/// non-2xx status ([`RecordNotFound`](Self::RecordNotFound),
/// [`CreateRejected`](Self::CreateRejected),
/// [`UnexpectedStatus`](Self::UnexpectedStatus)). No variant is retried by
/// this crate; callers decide how a failure surfaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ServiceError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, TLS handshake failure, etc.).
    NetworkError {
        /// Service that produced the error.
        service: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Service that produced the error.
        service: String,
        /// Error details.
        detail: String,
    },

    /// The service answered a fetch-by-id with a non-success status.
    RecordNotFound {
        /// Service that produced the error.
        service: String,
        /// Identifier that was requested.
        record_id: String,
        /// HTTP status the service answered with.
        status: u16,
    },

    /// The service refused a create request with a non-success status.
    CreateRejected {
        /// Service that produced the error.
        service: String,
        /// HTTP status the service answered with.
        status: u16,
        /// Response body, if one was readable.
        raw_message: Option<String>,
    },

    /// A listing call answered with a non-success status.
    UnexpectedStatus {
        /// Service that produced the error.
        service: String,
        /// HTTP status the service answered with.
        status: u16,
        /// Response body, if one was readable.
        raw_message: Option<String>,
    },

    /// Failed to parse the service's response body.
    ParseError {
        /// Service that produced the error.
        service: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Service that produced the error.
        service: String,
        /// Details about the serialization failure.
        detail: String,
    },
}

impl ServiceError {
    /// Whether this is expected behavior (absent record, rejected input)
    /// rather than a fault, used for log-level classification.
    ///
    /// `true` means log at `warn`, `false` means log at `error`.
    /// Keep this in sync when adding variants.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::RecordNotFound { .. } | Self::CreateRejected { .. }
        )
    }

    /// The service that produced this error.
    #[must_use]
    pub fn service(&self) -> &str {
        match self {
            Self::NetworkError { service, .. }
            | Self::Timeout { service, .. }
            | Self::RecordNotFound { service, .. }
            | Self::CreateRejected { service, .. }
            | Self::UnexpectedStatus { service, .. }
            | Self::ParseError { service, .. }
            | Self::SerializationError { service, .. } => service,
        }
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { service, detail } => {
                write!(f, "[{service}] Network error: {detail}")
            }
            Self::Timeout { service, detail } => {
                write!(f, "[{service}] Request timeout: {detail}")
            }
            Self::RecordNotFound {
                service,
                record_id,
                status,
            } => {
                write!(f, "[{service}] Record '{record_id}' not found (HTTP {status})")
            }
            Self::CreateRejected {
                service,
                status,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{service}] Create rejected (HTTP {status}): {msg}")
                } else {
                    write!(f, "[{service}] Create rejected (HTTP {status})")
                }
            }
            Self::UnexpectedStatus {
                service,
                status,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{service}] Unexpected HTTP {status}: {msg}")
                } else {
                    write!(f, "[{service}] Unexpected HTTP {status}")
                }
            }
            Self::ParseError { service, detail } => {
                write!(f, "[{service}] Parse error: {detail}")
            }
            Self::SerializationError { service, detail } => {
                write!(f, "[{service}] Serialization error: {detail}")
            }
        }
    }
}

impl std::error::Error for ServiceError {}

/// Convenience type alias for `Result<T, ServiceError>`.
pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ServiceError::NetworkError {
            service: "users".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[users] Network error: connection refused");
    }

    #[test]
    fn display_timeout() {
        let e = ServiceError::Timeout {
            service: "products".to_string(),
            detail: "30s elapsed".to_string(),
        };
        assert_eq!(e.to_string(), "[products] Request timeout: 30s elapsed");
    }

    #[test]
    fn display_record_not_found() {
        let e = ServiceError::RecordNotFound {
            service: "users".to_string(),
            record_id: "23".to_string(),
            status: 404,
        };
        assert_eq!(e.to_string(), "[users] Record '23' not found (HTTP 404)");
    }

    #[test]
    fn display_create_rejected_with_body() {
        let e = ServiceError::CreateRejected {
            service: "audit".to_string(),
            status: 401,
            raw_message: Some("missing bearer".to_string()),
        };
        assert_eq!(
            e.to_string(),
            "[audit] Create rejected (HTTP 401): missing bearer"
        );
    }

    #[test]
    fn display_create_rejected_without_body() {
        let e = ServiceError::CreateRejected {
            service: "audit".to_string(),
            status: 500,
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[audit] Create rejected (HTTP 500)");
    }

    #[test]
    fn display_unexpected_status() {
        let e = ServiceError::UnexpectedStatus {
            service: "audit".to_string(),
            status: 503,
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[audit] Unexpected HTTP 503");
    }

    #[test]
    fn display_parse_error() {
        let e = ServiceError::ParseError {
            service: "products".to_string(),
            detail: "bad json".to_string(),
        };
        assert_eq!(e.to_string(), "[products] Parse error: bad json");
    }

    #[test]
    fn display_serialization_error() {
        let e = ServiceError::SerializationError {
            service: "audit".to_string(),
            detail: "failed".to_string(),
        };
        assert_eq!(e.to_string(), "[audit] Serialization error: failed");
    }

    #[test]
    fn expected_variants() {
        assert!(
            ServiceError::RecordNotFound {
                service: "t".into(),
                record_id: "7".into(),
                status: 404,
            }
            .is_expected()
        );
        assert!(
            ServiceError::CreateRejected {
                service: "t".into(),
                status: 400,
                raw_message: None,
            }
            .is_expected()
        );
    }

    #[test]
    fn unexpected_variants() {
        assert!(
            !ServiceError::NetworkError {
                service: "t".into(),
                detail: "x".into(),
            }
            .is_expected()
        );
        assert!(
            !ServiceError::Timeout {
                service: "t".into(),
                detail: "x".into(),
            }
            .is_expected()
        );
        assert!(
            !ServiceError::ParseError {
                service: "t".into(),
                detail: "x".into(),
            }
            .is_expected()
        );
    }

    #[test]
    fn service_accessor() {
        let e = ServiceError::UnexpectedStatus {
            service: "audit".to_string(),
            status: 500,
            raw_message: None,
        };
        assert_eq!(e.service(), "audit");
    }

    #[test]
    fn serialize_json_tagged() {
        let e = ServiceError::RecordNotFound {
            service: "users".to_string(),
            record_id: "7".to_string(),
            status: 404,
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"RecordNotFound\""));
        assert!(json.contains("\"status\":404"));
    }

    #[test]
    fn deserialize_round_trip_all_variants() {
        let variants = vec![
            ServiceError::NetworkError {
                service: "t".into(),
                detail: "d".into(),
            },
            ServiceError::Timeout {
                service: "t".into(),
                detail: "d".into(),
            },
            ServiceError::RecordNotFound {
                service: "t".into(),
                record_id: "1".into(),
                status: 404,
            },
            ServiceError::CreateRejected {
                service: "t".into(),
                status: 400,
                raw_message: Some("no".into()),
            },
            ServiceError::UnexpectedStatus {
                service: "t".into(),
                status: 500,
                raw_message: None,
            },
            ServiceError::ParseError {
                service: "t".into(),
                detail: "d".into(),
            },
            ServiceError::SerializationError {
                service: "t".into(),
                detail: "d".into(),
            },
        ];

        for v in &variants {
            let json = serde_json::to_string(v).unwrap();
            let back: ServiceError = serde_json::from_str(&json).unwrap();
            assert_eq!(back.to_string(), v.to_string());
        }
    }
}
