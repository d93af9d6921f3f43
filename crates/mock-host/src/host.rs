//! Scripted host implementation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use panel_core::{AppError, HostBridge, TicketRecord};

/// How the scripted handshake behaves.
#[derive(Debug, Clone)]
pub enum Handshake {
    /// Completes immediately.
    Ready,
    /// Never completes.
    Never,
    /// Fails with this message.
    Fail(String),
}

/// A host whose handshake and ticket are fixed up front.
///
/// Clones share counters and the ticket, so a test can keep a handle after
/// moving the host into an orchestrator.
#[derive(Debug, Clone)]
pub struct ScriptedHost {
    handshake: Handshake,
    ticket: Arc<Mutex<Result<TicketRecord, AppError>>>,
    handshake_calls: Arc<AtomicUsize>,
    ticket_calls: Arc<AtomicUsize>,
}

impl ScriptedHost {
    /// A ready host serving `ticket`.
    pub fn with_ticket(ticket: TicketRecord) -> Self {
        Self {
            handshake: Handshake::Ready,
            ticket: Arc::new(Mutex::new(Ok(ticket))),
            handshake_calls: Arc::new(AtomicUsize::new(0)),
            ticket_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A ready host whose ticket read fails.
    pub fn failing_ticket(message: impl Into<String>) -> Self {
        let host = Self::with_ticket(TicketRecord::default());
        host.set_ticket(Err(AppError::host(message)));
        host
    }

    /// A host that never completes the handshake.
    pub fn unreachable() -> Self {
        Self::with_ticket(TicketRecord::default()).with_handshake(Handshake::Never)
    }

    /// Override the handshake behavior.
    pub fn with_handshake(mut self, handshake: Handshake) -> Self {
        self.handshake = handshake;
        self
    }

    /// Replace what the next ticket reads return.
    pub fn set_ticket(&self, ticket: Result<TicketRecord, AppError>) {
        *self.ticket.lock().unwrap_or_else(|p| p.into_inner()) = ticket;
    }

    /// Number of handshake attempts so far.
    pub fn handshake_calls(&self) -> usize {
        self.handshake_calls.load(Ordering::SeqCst)
    }

    /// Number of ticket reads so far.
    pub fn ticket_calls(&self) -> usize {
        self.ticket_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HostBridge for ScriptedHost {
    async fn handshake(&self) -> Result<(), AppError> {
        self.handshake_calls.fetch_add(1, Ordering::SeqCst);
        match &self.handshake {
            Handshake::Ready => Ok(()),
            Handshake::Never => std::future::pending().await,
            Handshake::Fail(message) => Err(AppError::host(message.clone())),
        }
    }

    async fn ticket_data(&self) -> Result<TicketRecord, AppError> {
        self.ticket_calls.fetch_add(1, Ordering::SeqCst);
        self.ticket.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    fn name(&self) -> &str {
        "ScriptedHost"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_ready_host() {
        let host = ScriptedHost::with_ticket(TicketRecord::new("a@b.com", "s", "d"));
        host.handshake().await.unwrap();
        let ticket = host.ticket_data().await.unwrap();
        assert_eq!(ticket.requester_email, "a@b.com");
        assert_eq!(host.handshake_calls(), 1);
        assert_eq!(host.ticket_calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unreachable_never_completes() {
        let host = ScriptedHost::unreachable();
        let result = tokio::time::timeout(Duration::from_secs(60), host.handshake()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_failing_ticket() {
        let host = ScriptedHost::failing_ticket("boom");
        let err = host.ticket_data().await.unwrap_err();
        assert_eq!(err.message, "boom");
    }
}
