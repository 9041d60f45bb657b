//! Error types for botica-cli.
//!
//! Only two conditions are fatal to a run: missing credentials and an
//! unreadable source file. Everything else a statement can do wrong is
//! handled as a counted outcome, not an error.

use botica_link::BoticaLinkError;
use std::fmt;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CLIError>;

/// Errors that can occur in the CLI
#[derive(Debug)]
pub enum CLIError {
    /// Error from the botica-link library
    LinkError(BoticaLinkError),

    /// Configuration or credential error
    ConfigurationError(String),

    /// Source file could not be read
    FileError(String),

    /// Invalid command input (e.g. a malformed table name)
    ParseError(String),
}

impl fmt::Display for CLIError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CLIError::LinkError(e) => write!(f, "{}", e),
            CLIError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            CLIError::FileError(msg) => write!(f, "File error: {}", msg),
            CLIError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for CLIError {}

impl From<BoticaLinkError> for CLIError {
    fn from(err: BoticaLinkError) -> Self {
        CLIError::LinkError(err)
    }
}

impl From<std::io::Error> for CLIError {
    fn from(err: std::io::Error) -> Self {
        CLIError::FileError(err.to_string())
    }
}

impl From<toml::de::Error> for CLIError {
    fn from(err: toml::de::Error) -> Self {
        CLIError::ConfigurationError(format!("TOML parse error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CLIError::FileError("No such file or directory".into());
        assert_eq!(err.to_string(), "File error: No such file or directory");

        let err = CLIError::ConfigurationError("BOTICA_DB_URL is not set".into());
        assert_eq!(
            err.to_string(),
            "Configuration error: BOTICA_DB_URL is not set"
        );
    }

    #[test]
    fn test_link_error_passthrough() {
        let err: CLIError = BoticaLinkError::ServerError {
            status_code: 401,
            message: "invalid api key".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Server error (401): invalid api key");
    }
}
