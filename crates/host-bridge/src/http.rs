//! Host bridge over HTTP.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use panel_core::{AppError, HostBridge, TicketRecord};
use reqwest::Client;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::config::HostConfig;
use crate::error::HostError;

const EMAIL_KEY: &str = "ticket.requester.email";
const SUBJECT_KEY: &str = "ticket.subject";
const DESCRIPTION_KEY: &str = "ticket.description";

/// Client for the host's ticket bridge.
///
/// The handshake polls the host until it reports ready; ticket data can
/// only be read after that.
#[derive(Clone)]
pub struct HttpHostBridge {
    http: Client,
    config: HostConfig,
    connected: Arc<AtomicBool>,
}

impl HttpHostBridge {
    /// Create a new bridge. Nothing is contacted until [`HostBridge::handshake`].
    pub fn new(config: HostConfig) -> Result<Self, HostError> {
        let http = Client::builder().build().map_err(HostError::Http)?;
        Ok(Self {
            http,
            config,
            connected: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Check if the handshake has completed.
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// Get the configuration.
    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Ask the host once whether it is ready.
    async fn check_ready(&self) -> bool {
        let url = self.config.handshake_url();
        match self.http.get(&url).send().await {
            Ok(resp) if resp.status().is_success() => true,
            Ok(resp) => {
                debug!("Host not ready yet ({})", resp.status());
                false
            }
            Err(e) => {
                debug!("Host readiness check failed: {}", e);
                false
            }
        }
    }

    /// Read the raw ticket fields.
    async fn fetch_ticket(&self) -> Result<TicketRecord, HostError> {
        if !self.is_connected() {
            return Err(HostError::NotInitialized);
        }

        let response = self.http.get(self.config.ticket_url()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(HostError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        let body = response.text().await?;
        let mut fields: HashMap<String, Option<String>> = serde_json::from_str(&body)?;
        let mut take = |key: &str| fields.remove(key).flatten().unwrap_or_default();

        Ok(TicketRecord {
            requester_email: take(EMAIL_KEY),
            subject: take(SUBJECT_KEY),
            description: take(DESCRIPTION_KEY),
        })
    }
}

#[async_trait]
impl HostBridge for HttpHostBridge {
    async fn handshake(&self) -> Result<(), AppError> {
        if self.is_connected() {
            return Ok(());
        }

        debug!("Waiting for host at {}", self.config.base_url);
        while !self.check_ready().await {
            sleep(self.config.poll_interval).await;
        }

        self.connected.store(true, Ordering::SeqCst);
        info!("Connected to host at {}", self.config.base_url);
        Ok(())
    }

    async fn ticket_data(&self) -> Result<TicketRecord, AppError> {
        Ok(self.fetch_ticket().await?)
    }

    fn name(&self) -> &str {
        "HttpHostBridge"
    }
}
