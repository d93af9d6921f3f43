//! Collaborator traits at the panel's I/O seams.
//!
//! The orchestrator only talks to these traits, so tests can substitute
//! in-memory fakes for the host, the directory and the clipboard.

use async_trait::async_trait;

use crate::error::AppError;
use crate::types::{CustomerPost, CustomerProfile, TicketRecord};

/// The embedding ticketing host.
#[async_trait]
pub trait HostBridge: Send + Sync {
    /// Complete the handshake with the host.
    ///
    /// May never resolve when the panel is not embedded; the caller bounds
    /// it with a timeout.
    async fn handshake(&self) -> Result<(), AppError>;

    /// Read the current ticket. Absent fields come back as empty strings.
    async fn ticket_data(&self) -> Result<TicketRecord, AppError>;

    /// Get a human-readable name for this host implementation.
    fn name(&self) -> &str {
        "host"
    }
}

/// The external customer directory.
#[async_trait]
pub trait CustomerDirectory: Send + Sync {
    /// Find the first customer whose email matches. `Ok(None)` means no match.
    async fn lookup_by_email(&self, email: &str) -> Result<Option<CustomerProfile>, AppError>;

    /// List posts authored by a customer, at most `limit`, in upstream order.
    async fn list_posts(
        &self,
        customer_id: u64,
        limit: usize,
    ) -> Result<Vec<CustomerPost>, AppError>;
}

/// System clipboard access.
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Copy plain text. Returns `false` on failure, never errors.
    async fn copy(&self, text: &str) -> bool;
}
