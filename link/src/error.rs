//! Error types for botica-link.
//!
//! A small closed set of failure variants so callers can tell a server-side
//! rejection apart from a transport failure without string matching.

use std::fmt;

/// Result type for botica-link operations
pub type Result<T> = std::result::Result<T, BoticaLinkError>;

/// Errors that can occur when talking to the SQL RPC endpoint
#[derive(Debug, Clone)]
pub enum BoticaLinkError {
    /// The HTTP call itself failed (connect, DNS, TLS, broken body)
    NetworkError(String),

    /// Client was built or used with invalid configuration
    ConfigurationError(String),

    /// Payload could not be serialized or a response could not be decoded
    SerializationError(String),

    /// The endpoint answered with an application-level error
    ServerError { status_code: u16, message: String },
}

impl fmt::Display for BoticaLinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoticaLinkError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            BoticaLinkError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            BoticaLinkError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            BoticaLinkError::ServerError {
                status_code,
                message,
            } => write!(f, "Server error ({}): {}", status_code, message),
        }
    }
}

impl std::error::Error for BoticaLinkError {}

impl From<reqwest::Error> for BoticaLinkError {
    fn from(err: reqwest::Error) -> Self {
        BoticaLinkError::NetworkError(err.to_string())
    }
}

impl From<serde_json::Error> for BoticaLinkError {
    fn from(err: serde_json::Error) -> Self {
        BoticaLinkError::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BoticaLinkError::NetworkError("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");

        let err = BoticaLinkError::ServerError {
            status_code: 404,
            message: "function exec_sql does not exist".into(),
        };
        assert_eq!(
            err.to_string(),
            "Server error (404): function exec_sql does not exist"
        );
    }

    #[test]
    fn test_from_serde_json_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: BoticaLinkError = parse_err.into();
        assert!(matches!(err, BoticaLinkError::SerializationError(_)));
    }
}
