//! Error types for clipboard writes.

use thiserror::Error;

/// Errors a single clipboard writer can report.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard tool could be started.
    #[error("no clipboard tool available")]
    NoTool,

    /// The clipboard tool ran but reported failure.
    #[error("{tool} exited with {status}")]
    ToolFailed { tool: String, status: String },

    /// Output is not attached to a terminal.
    #[error("stdout is not a terminal")]
    NotATerminal,

    /// I/O failed while writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
