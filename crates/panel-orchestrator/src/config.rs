//! Orchestrator configuration.

use std::time::Duration;

use panel_core::HostContext;

/// Default bound on the host handshake.
pub const DEFAULT_HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(15);

/// Default number of recent posts fetched per customer.
pub const DEFAULT_POSTS_LIMIT: usize = 3;

/// Configuration for [`DataOrchestrator`](crate::DataOrchestrator).
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Hosted or standalone development.
    pub context: HostContext,
    /// How long `initialize` waits for the host handshake.
    pub handshake_timeout: Duration,
    /// Maximum posts kept for a customer.
    pub posts_limit: usize,
}

impl OrchestratorConfig {
    /// Hosted configuration with default bounds.
    pub fn hosted() -> Self {
        Self::default()
    }

    /// Development configuration; the simulated ticket is injected.
    pub fn development() -> Self {
        Self {
            context: HostContext::Development,
            ..Self::default()
        }
    }

    /// Set the context.
    pub fn with_context(mut self, context: HostContext) -> Self {
        self.context = context;
        self
    }

    /// Set the handshake bound.
    pub fn with_handshake_timeout(mut self, timeout: Duration) -> Self {
        self.handshake_timeout = timeout;
        self
    }

    /// Set the posts limit.
    pub fn with_posts_limit(mut self, limit: usize) -> Self {
        self.posts_limit = limit;
        self
    }
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            context: HostContext::Hosted,
            handshake_timeout: DEFAULT_HANDSHAKE_TIMEOUT,
            posts_limit: DEFAULT_POSTS_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OrchestratorConfig::default();
        assert_eq!(config.context, HostContext::Hosted);
        assert_eq!(config.handshake_timeout, Duration::from_secs(15));
        assert_eq!(config.posts_limit, 3);
    }

    #[test]
    fn test_development() {
        let config = OrchestratorConfig::development().with_posts_limit(5);
        assert!(config.context.is_development());
        assert_eq!(config.posts_limit, 5);
    }
}
