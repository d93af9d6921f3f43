//! Simulated host for standalone runs.

use async_trait::async_trait;
use panel_core::{AppError, HostBridge, TicketRecord};

/// A host that is always ready and always serves the simulated ticket.
///
/// The orchestrator never calls the host in development context; this exists
/// so a standalone binary still has a concrete host to hand over.
#[derive(Debug, Clone, Default)]
pub struct SimulatedHost;

impl SimulatedHost {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostBridge for SimulatedHost {
    async fn handshake(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn ticket_data(&self) -> Result<TicketRecord, AppError> {
        Ok(TicketRecord::simulated())
    }

    fn name(&self) -> &str {
        "SimulatedHost"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_simulated_host() {
        let host = SimulatedHost::new();
        host.handshake().await.unwrap();
        let ticket = host.ticket_data().await.unwrap();
        assert_eq!(ticket, TicketRecord::simulated());
        assert_eq!(host.name(), "SimulatedHost");
    }
}
