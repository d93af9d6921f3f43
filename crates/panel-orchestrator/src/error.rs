//! Error types for orchestrator operations.

use panel_core::ResourceKind;
use thiserror::Error;

/// Errors returned by explicit orchestrator actions.
///
/// Fetch failures are never returned here; they are stored on the
/// resource they belong to.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrchestratorError {
    /// The host handshake has not completed; only a full refresh can recover.
    #[error("panel not initialized")]
    NotInitialized,

    /// The resource's prerequisite has no usable value, so nothing was fetched.
    #[error("cannot retry {resource}: {reason}")]
    DependencyNotReady {
        resource: ResourceKind,
        reason: String,
    },
}
