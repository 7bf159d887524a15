use serde::{Deserialize, Serialize};

/// Unified error type for all blog API operations.
///
/// Every request is a single attempt: no variant is retried by the client, and
/// callers are expected to surface the failure and stop. All variants are
/// serializable for structured error reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The requested post does not exist on the server.
    PostNotFound {
        /// Identifier of the post that was not found.
        post_id: String,
        /// Original error message from the server, if available.
        raw_message: Option<String>,
    },

    /// The site or its blog container does not exist on the server.
    SiteNotFound {
        /// Short name of the site that was not found.
        site: String,
        /// Original error message from the server, if available.
        raw_message: Option<String>,
    },

    /// The current session lacks permission for the requested operation.
    PermissionDenied {
        /// Original error message from the server, if available.
        raw_message: Option<String>,
    },

    /// A request parameter is invalid (e.g., empty post identifier).
    InvalidParameter {
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// Failed to parse the server's JSON response.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// An unrecognized error from the server.
    ///
    /// This is a catch-all for HTTP statuses not mapped to a specific variant.
    Unknown {
        /// HTTP status code, if the response got that far.
        status: Option<u16>,
        /// Raw error message or response body.
        raw_message: String,
    },
}

impl ApiError {
    /// 是否为预期行为（资源不存在、权限不足等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::PostNotFound { .. }
                | Self::SiteNotFound { .. }
                | Self::PermissionDenied { .. }
                | Self::InvalidParameter { .. }
        )
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => {
                write!(f, "Network error: {detail}")
            }
            Self::Timeout { detail } => {
                write!(f, "Request timeout: {detail}")
            }
            Self::PostNotFound {
                post_id,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "Post '{post_id}' not found: {msg}")
                } else {
                    write!(f, "Post '{post_id}' not found")
                }
            }
            Self::SiteNotFound { site, raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Site '{site}' not found: {msg}")
                } else {
                    write!(f, "Site '{site}' not found")
                }
            }
            Self::PermissionDenied { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Permission denied: {msg}")
                } else {
                    write!(f, "Permission denied")
                }
            }
            Self::InvalidParameter { param, detail } => {
                write!(f, "Invalid parameter '{param}': {detail}")
            }
            Self::ParseError { detail } => {
                write!(f, "Parse error: {detail}")
            }
            Self::SerializationError { detail } => {
                write!(f, "Serialization error: {detail}")
            }
            Self::Unknown {
                status,
                raw_message,
            } => {
                if let Some(code) = status {
                    write!(f, "HTTP {code}: {raw_message}")
                } else {
                    write!(f, "{raw_message}")
                }
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ApiError::NetworkError {
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "Network error: connection refused");
    }

    #[test]
    fn display_timeout() {
        let e = ApiError::Timeout {
            detail: "30s elapsed".to_string(),
        };
        assert_eq!(e.to_string(), "Request timeout: 30s elapsed");
    }

    #[test]
    fn display_post_not_found_with_message() {
        let e = ApiError::PostNotFound {
            post_id: "my-post".to_string(),
            raw_message: Some("no such node".to_string()),
        };
        assert_eq!(e.to_string(), "Post 'my-post' not found: no such node");
    }

    #[test]
    fn display_post_not_found_without_message() {
        let e = ApiError::PostNotFound {
            post_id: "my-post".to_string(),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "Post 'my-post' not found");
    }

    #[test]
    fn display_site_not_found() {
        let e = ApiError::SiteNotFound {
            site: "marketing".to_string(),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "Site 'marketing' not found");
    }

    #[test]
    fn display_permission_denied() {
        let e = ApiError::PermissionDenied {
            raw_message: Some("no access".to_string()),
        };
        assert_eq!(e.to_string(), "Permission denied: no access");
    }

    #[test]
    fn display_invalid_parameter() {
        let e = ApiError::InvalidParameter {
            param: "post_id".to_string(),
            detail: "must not be empty".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Invalid parameter 'post_id': must not be empty"
        );
    }

    #[test]
    fn display_parse_error() {
        let e = ApiError::ParseError {
            detail: "bad json".to_string(),
        };
        assert_eq!(e.to_string(), "Parse error: bad json");
    }

    #[test]
    fn display_unknown_with_status() {
        let e = ApiError::Unknown {
            status: Some(500),
            raw_message: "something broke".to_string(),
        };
        assert_eq!(e.to_string(), "HTTP 500: something broke");
    }

    #[test]
    fn display_unknown_without_status() {
        let e = ApiError::Unknown {
            status: None,
            raw_message: "something broke".to_string(),
        };
        assert_eq!(e.to_string(), "something broke");
    }

    #[test]
    fn is_expected_variants() {
        assert!(
            ApiError::PostNotFound {
                post_id: "p".into(),
                raw_message: None,
            }
            .is_expected()
        );
        assert!(
            ApiError::PermissionDenied { raw_message: None }.is_expected()
        );
        assert!(
            !ApiError::NetworkError {
                detail: "x".into(),
            }
            .is_expected()
        );
        assert!(
            !ApiError::ParseError {
                detail: "x".into(),
            }
            .is_expected()
        );
    }

    #[test]
    fn serialize_json_round_trip() {
        let e = ApiError::PostNotFound {
            post_id: "my-post".to_string(),
            raw_message: Some("gone".to_string()),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"PostNotFound\""));
        assert!(json.contains("\"post_id\":\"my-post\""));
    }

    #[test]
    fn deserialize_all_variants() {
        let variants: Vec<ApiError> = vec![
            ApiError::NetworkError {
                detail: "d".into(),
            },
            ApiError::Timeout {
                detail: "d".into(),
            },
            ApiError::PostNotFound {
                post_id: "p".into(),
                raw_message: None,
            },
            ApiError::SiteNotFound {
                site: "s".into(),
                raw_message: None,
            },
            ApiError::PermissionDenied { raw_message: None },
            ApiError::InvalidParameter {
                param: "post_id".into(),
                detail: "bad".into(),
            },
            ApiError::ParseError {
                detail: "bad".into(),
            },
            ApiError::SerializationError {
                detail: "fail".into(),
            },
            ApiError::Unknown {
                status: Some(500),
                raw_message: "oops".into(),
            },
        ];

        for v in &variants {
            let json = serde_json::to_string(v).unwrap();
            let back: ApiError = serde_json::from_str(&json).unwrap();
            assert_eq!(back.to_string(), v.to_string());
        }
    }
}
