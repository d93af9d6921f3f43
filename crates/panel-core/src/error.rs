//! Error types shared across the panel.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of a resource failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Transport failure, timeout, or non-success status.
    Network,
    /// The requested entity does not exist.
    NotFound,
    /// The host environment failed to hand over ticket data.
    Host,
    /// Anything that could not be classified.
    Unknown,
}

impl ErrorKind {
    /// Get the wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::NotFound => "not_found",
            Self::Host => "host",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error scoped to one panel resource.
///
/// The message is surfaced to the agent verbatim, so it is also the
/// `Display` output.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct AppError {
    /// Human-readable message.
    pub message: String,
    /// Failure classification.
    pub kind: ErrorKind,
    /// Whether a manual retry may succeed.
    pub retryable: bool,
}

impl AppError {
    /// Create a new error.
    pub fn new(message: impl Into<String>, kind: ErrorKind, retryable: bool) -> Self {
        Self {
            message: message.into(),
            kind,
            retryable,
        }
    }

    /// Create a retryable network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(message, ErrorKind::Network, true)
    }

    /// Create a host error. Host failures are only recoverable by a full refresh.
    pub fn host(message: impl Into<String>) -> Self {
        Self::new(message, ErrorKind::Host, true)
    }

    /// Create a retryable unclassified error.
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(message, ErrorKind::Unknown, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message() {
        let err = AppError::network("Request timeout");
        assert_eq!(err.to_string(), "Request timeout");
        assert_eq!(err.kind, ErrorKind::Network);
        assert!(err.retryable);
    }

    #[test]
    fn test_kind_wire_names() {
        assert_eq!(ErrorKind::NotFound.as_str(), "not_found");
        assert_eq!(
            serde_json::to_string(&ErrorKind::Host).unwrap(),
            "\"host\""
        );
    }
}
