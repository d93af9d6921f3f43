//! Dependent fetch orchestration.

use panel_core::{
    AppError, CustomerDirectory, ErrorKind, HostBridge, ResourceKind, ResourceState, TicketRecord,
};
use tokio::sync::watch;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::config::OrchestratorConfig;
use crate::error::OrchestratorError;
use crate::snapshot::PanelSnapshot;
use crate::tokens::RequestTokens;

/// Message stored on the ticket when the host never answers the handshake.
pub const HANDSHAKE_TIMEOUT_MESSAGE: &str =
    "Host initialization timeout - make sure you are running this panel within the ticketing host";

/// Coordinates the ticket → customer → posts chain.
///
/// The orchestrator:
/// - Owns one [`ResourceState`] per resource, published through a watch channel
/// - Starts each stage only after its predecessor resolved to a usable value
/// - Stamps every request so late responses from superseded requests are dropped
/// - Never retries on its own; retries are explicit calls to [`retry`](Self::retry)
pub struct DataOrchestrator<H: HostBridge, D: CustomerDirectory> {
    host: H,
    directory: D,
    config: OrchestratorConfig,
    state: watch::Sender<PanelSnapshot>,
    tokens: RequestTokens,
}

impl<H: HostBridge, D: CustomerDirectory> DataOrchestrator<H, D> {
    /// Create a new orchestrator with the given components. Nothing is fetched yet.
    pub fn new(host: H, directory: D, config: OrchestratorConfig) -> Self {
        let (state, _rx) = watch::channel(PanelSnapshot::default());
        Self {
            host,
            directory,
            config,
            state,
            tokens: RequestTokens::default(),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Get the host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Get the directory.
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Current state of all resources.
    pub fn snapshot(&self) -> PanelSnapshot {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<PanelSnapshot> {
        self.state.subscribe()
    }

    /// Whether the host handshake (or development bypass) has completed.
    pub fn is_initialized(&self) -> bool {
        self.state.borrow().initialized
    }

    /// Reach the host and start the chain.
    ///
    /// In development context the simulated ticket is injected without
    /// touching the host. Otherwise the handshake is bounded by the configured
    /// timeout; a timeout or handshake failure leaves the ticket failed with a
    /// host error and stops there.
    pub async fn initialize(&self) {
        if self.config.context.is_development() {
            info!("Development context detected - using simulated ticket data");
            let token = self.tokens.issue(ResourceKind::Ticket);
            let ticket = TicketRecord::simulated();
            let applied = self.commit(ResourceKind::Ticket, token, |s| {
                s.ticket = ResourceState::Ready(ticket.clone());
                s.initialized = true;
                self.clear_customer(s);
            });
            if applied {
                self.after_ticket(&ticket).await;
            }
            return;
        }

        let token = self.begin(ResourceKind::Ticket);
        info!(
            "Waiting up to {:?} for {} handshake",
            self.config.handshake_timeout,
            self.host.name()
        );

        let outcome = match timeout(self.config.handshake_timeout, self.host.handshake()).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(err)) => Err(AppError::new(err.message, ErrorKind::Host, err.retryable)),
            Err(_) => Err(AppError::host(HANDSHAKE_TIMEOUT_MESSAGE)),
        };

        match outcome {
            Ok(()) => {
                info!("Host handshake complete");
                self.state.send_modify(|s| s.initialized = true);
                self.load_ticket().await;
            }
            Err(err) => {
                warn!("Host initialization failed: {}", err);
                self.commit(ResourceKind::Ticket, token, |s| {
                    s.ticket = ResourceState::Failed(err);
                    self.clear_customer(s);
                });
            }
        }
    }

    /// Load the ticket from the host, then continue the chain.
    ///
    /// Whatever the outcome, customer and posts from an earlier ticket are
    /// dropped when the response lands.
    pub async fn load_ticket(&self) {
        let token = self.begin(ResourceKind::Ticket);
        let result = self.host.ticket_data().await;

        if let Err(err) = &result {
            warn!("Ticket load failed: {}", err);
        }

        let state: ResourceState<TicketRecord> = result.clone().into();
        let applied = self.commit(ResourceKind::Ticket, token, |s| {
            s.ticket = state;
            self.clear_customer(s);
        });
        if !applied {
            return;
        }

        if let Ok(ticket) = result {
            self.after_ticket(&ticket).await;
        }
    }

    /// Look up the customer for `email`, then continue the chain.
    pub async fn load_customer(&self, email: &str) {
        let token = self.begin(ResourceKind::Customer);
        let result = self.directory.lookup_by_email(email).await;

        let state: ResourceState<_> = result.clone().into();
        let applied = self.commit(ResourceKind::Customer, token, |s| {
            s.customer = state;
            self.clear_posts(s);
        });
        if !applied {
            return;
        }

        match result {
            Ok(Some(profile)) => {
                info!("Customer {} found for {}", profile.id, email);
                self.load_posts(profile.id).await;
            }
            Ok(None) => info!("No customer profile for {}; posts not requested", email),
            Err(err) => warn!("Customer lookup failed for {}: {}", email, err),
        }
    }

    /// Load the most recent posts for a customer.
    pub async fn load_posts(&self, customer_id: u64) {
        let token = self.begin(ResourceKind::Posts);
        let limit = self.config.posts_limit;

        let result = self
            .directory
            .list_posts(customer_id, limit)
            .await
            .map(|mut posts| {
                posts.truncate(limit);
                posts
            });

        match &result {
            Ok(posts) => debug!("Loaded {} posts for customer {}", posts.len(), customer_id),
            Err(err) => warn!("Posts load failed for customer {}: {}", customer_id, err),
        }

        let state: ResourceState<_> = result.into();
        self.commit(ResourceKind::Posts, token, |s| s.posts = state);
    }

    /// Clear customer and posts and restart the whole chain.
    pub async fn refresh_all(&self) {
        info!("Refreshing all panel data");
        self.state.send_modify(|s| self.clear_customer(s));

        if self.is_initialized() {
            self.load_ticket().await;
        } else {
            self.initialize().await;
        }
    }

    /// Re-run one resource's load with the upstream values already held.
    ///
    /// Sibling resources are left alone. Downstream resources follow the
    /// normal chain: a ticket retry resets customer and posts, and a customer
    /// retry resets posts and reloads them only if a profile is found.
    pub async fn retry(&self, resource: ResourceKind) -> Result<(), OrchestratorError> {
        info!("Retrying {}", resource);
        match resource {
            ResourceKind::Ticket => {
                if !self.is_initialized() {
                    return Err(OrchestratorError::NotInitialized);
                }
                self.load_ticket().await;
            }
            ResourceKind::Customer => {
                let email = self
                    .snapshot()
                    .ticket()
                    .map(|t| t.requester_email.clone())
                    .filter(|email| !email.is_empty())
                    .ok_or_else(|| OrchestratorError::DependencyNotReady {
                        resource,
                        reason: "no requester email".to_string(),
                    })?;
                self.load_customer(&email).await;
            }
            ResourceKind::Posts => {
                let customer_id = self
                    .snapshot()
                    .profile()
                    .map(|p| p.id)
                    .ok_or_else(|| OrchestratorError::DependencyNotReady {
                        resource,
                        reason: "no customer profile".to_string(),
                    })?;
                self.load_posts(customer_id).await;
            }
        }
        Ok(())
    }

    /// Decide whether the ticket leads to a customer lookup.
    async fn after_ticket(&self, ticket: &TicketRecord) {
        if ticket.has_requester_email() {
            self.load_customer(&ticket.requester_email).await;
        } else {
            info!("Ticket has no requester email; customer lookup skipped");
        }
    }

    /// Expire customer and posts requests and reset both resources.
    fn clear_customer(&self, s: &mut PanelSnapshot) {
        self.tokens.invalidate(ResourceKind::Customer);
        s.customer = ResourceState::NotStarted;
        self.clear_posts(s);
    }

    /// Expire posts requests and reset the resource.
    fn clear_posts(&self, s: &mut PanelSnapshot) {
        self.tokens.invalidate(ResourceKind::Posts);
        s.posts = ResourceState::NotStarted;
    }

    /// Issue a token and mark the resource loading.
    fn begin(&self, kind: ResourceKind) -> u64 {
        let token = self.tokens.issue(kind);
        debug!("{} request {} started", kind, token);
        self.state.send_modify(|s| match kind {
            ResourceKind::Ticket => s.ticket = ResourceState::Loading,
            ResourceKind::Customer => s.customer = ResourceState::Loading,
            ResourceKind::Posts => s.posts = ResourceState::Loading,
        });
        token
    }

    /// Apply `update` if `token` is still the latest for `kind`.
    ///
    /// Returns `false` when the response was stale and dropped.
    fn commit(
        &self,
        kind: ResourceKind,
        token: u64,
        update: impl FnOnce(&mut PanelSnapshot),
    ) -> bool {
        let applied = self.state.send_if_modified(|s| {
            if !self.tokens.is_current(kind, token) {
                return false;
            }
            update(s);
            true
        });

        if applied {
            debug!("{} request {} applied: {}", kind, token, self.state.borrow().label(kind));
        } else {
            debug!("Discarding stale {} response (request {})", kind, token);
        }
        applied
    }
}
