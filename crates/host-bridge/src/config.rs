//! Configuration types for host-bridge.

use std::env;
use std::time::Duration;

use crate::error::HostError;

/// Default host bridge URL.
pub const DEFAULT_HOST_URL: &str = "http://localhost:4567";

/// Default bound on the handshake (15 seconds).
pub const DEFAULT_HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(15);

/// Default delay between handshake polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Configuration for reaching the host.
#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Base URL of the host bridge endpoint.
    pub base_url: String,
    /// How long the caller should wait for the handshake.
    pub handshake_timeout: Duration,
    /// Delay between handshake polls while the host is not ready.
    pub poll_interval: Duration,
}

impl HostConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            handshake_timeout: DEFAULT_HANDSHAKE_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Set the poll interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `HOST_BASE_URL` - Host bridge URL (default: http://localhost:4567)
    /// - `HOST_HANDSHAKE_TIMEOUT_SECS` - Handshake bound (default: 15)
    /// - `HOST_POLL_INTERVAL_MS` - Poll interval (default: 100)
    pub fn from_env() -> Result<Self, HostError> {
        let base_url = env::var("HOST_BASE_URL").unwrap_or_else(|_| DEFAULT_HOST_URL.to_string());

        let handshake_timeout = env::var("HOST_HANDSHAKE_TIMEOUT_SECS")
            .ok()
            .map(|v| {
                v.parse::<u64>().map(Duration::from_secs).map_err(|_| {
                    HostError::Config(format!("HOST_HANDSHAKE_TIMEOUT_SECS is not a number: {}", v))
                })
            })
            .transpose()?
            .unwrap_or(DEFAULT_HANDSHAKE_TIMEOUT);

        let poll_interval = env::var("HOST_POLL_INTERVAL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_POLL_INTERVAL);

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            handshake_timeout,
            poll_interval,
        })
    }

    /// Get the handshake URL.
    pub fn handshake_url(&self) -> String {
        format!("{}/handshake", self.base_url)
    }

    /// Get the ticket data URL.
    pub fn ticket_url(&self) -> String {
        format!("{}/ticket", self.base_url)
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST_URL)
    }
}
