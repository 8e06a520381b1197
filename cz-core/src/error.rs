//! Error types for the ContentZen client.
//!
//! Every failure a client call can produce is folded into `CzError`:
//! a missing credential is caught before any network activity, transport and
//! file-system failures are surfaced unchanged, unexpected statuses carry the
//! status line, and undecodable bodies become serialization errors.

use thiserror::Error;

/// Convenience type alias for Results using CzError.
pub type CzResult<T> = Result<T, CzError>;

/// Unified error type for the ContentZen client.
#[derive(Error, Debug)]
pub enum CzError {
    // -- Precondition errors --
    /// An authenticated endpoint was called without an API token.
    #[error("API token required for this endpoint")]
    MissingCredential,

    // -- Configuration errors --
    /// Failed to load or parse configuration.
    #[error("configuration error: {0}")]
    Config(String),

    // -- Transport errors --
    /// HTTP request failed before a response was received.
    #[error("http error: {0}")]
    Http(String),

    /// HTTP request timed out.
    #[error("request timeout: {0}")]
    Timeout(String),

    /// File system operation failed (opening an upload, writing a download).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // -- Protocol errors --
    /// The server answered with a status outside the accepted set.
    #[error("unexpected status: {status} {reason}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Reason phrase from the status line.
        reason: String,
    },

    // -- Decode errors --
    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    // -- Generic --
    /// Wrapping anyhow errors for interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CzError {
    /// Whether this error was raised before any request was sent.
    pub fn is_precondition(&self) -> bool {
        matches!(self, CzError::MissingCredential)
    }

    /// The HTTP status code, if the server rejected the request.
    pub fn status(&self) -> Option<u16> {
        match self {
            CzError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<serde_json::Error> for CzError {
    fn from(e: serde_json::Error) -> Self {
        CzError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for CzError {
    fn from(e: toml::de::Error) -> Self {
        CzError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_status_display() {
        let err = CzError::UnexpectedStatus {
            status: 404,
            reason: "Not Found".into(),
        };
        assert_eq!(err.to_string(), "unexpected status: 404 Not Found");
        assert_eq!(err.status(), Some(404));
        assert!(err.is_not_found());
        assert!(!err.is_precondition());
    }

    #[test]
    fn test_missing_credential() {
        let err = CzError::MissingCredential;
        assert!(err.is_precondition());
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "API token required for this endpoint");
    }

    #[test]
    fn test_from_serde_json() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: CzError = parse.unwrap_err().into();
        assert!(matches!(err, CzError::Serialization(_)));
    }

    #[test]
    fn test_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CzError = io.into();
        assert!(err.to_string().starts_with("io error:"));
    }
}
