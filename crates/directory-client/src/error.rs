//! Error types for directory-client.

use panel_core::{AppError, ErrorKind};
use thiserror::Error;

/// Errors that can occur when talking to the customer directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// No response within the configured timeout.
    #[error("Request timeout")]
    Timeout,

    /// HTTP transport failed.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Directory answered with a non-success status.
    #[error("HTTP {code}: {reason}")]
    Status { code: u16, reason: String },

    /// Response body was not the expected JSON.
    #[error("Invalid directory response: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl DirectoryError {
    /// Classify into the kind stored on a failed resource.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Status { code: 404, .. } => ErrorKind::NotFound,
            Self::Timeout | Self::Http(_) | Self::Status { .. } => ErrorKind::Network,
            Self::Json(_) | Self::Config(_) => ErrorKind::Unknown,
        }
    }
}

impl From<DirectoryError> for AppError {
    fn from(err: DirectoryError) -> Self {
        // Every directory failure is worth a manual retry.
        AppError::new(err.to_string(), err.kind(), true)
    }
}
