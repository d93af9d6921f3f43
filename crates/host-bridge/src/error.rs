//! Error types for host-bridge.

use panel_core::AppError;
use thiserror::Error;

/// Errors that can occur when talking to the ticketing host.
#[derive(Debug, Error)]
pub enum HostError {
    /// Ticket data requested before the handshake completed.
    #[error("Host client not initialized - call initialize() first")]
    NotInitialized,

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Host answered with a non-success status.
    #[error("HTTP {code}: {reason}")]
    Status { code: u16, reason: String },

    /// JSON deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<HostError> for AppError {
    fn from(err: HostError) -> Self {
        match err {
            HostError::NotInitialized | HostError::Config(_) => AppError::host(err.to_string()),
            other => AppError::host(format!("Failed to fetch ticket data: {}", other)),
        }
    }
}
