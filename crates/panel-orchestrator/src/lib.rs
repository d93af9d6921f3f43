//! Data orchestrator for the customer intelligence panel.
//!
//! This crate provides the [`DataOrchestrator`] type which loads the ticket,
//! the requester's customer profile and their recent posts, each stage
//! depending on the one before it.
//!
//! # Features
//!
//! - Bounded host handshake, with a development bypass serving a simulated ticket
//! - Per-resource loading, ready and failed states published on a watch channel
//! - Stale responses from superseded requests are discarded
//! - Explicit per-resource retry and full refresh
//! - Failures stay scoped to the resource that failed
//! - [`DraftDriver`] reschedules the reply draft whenever its inputs change
//!
//! # Architecture
//!
//! ```text
//! initialize()
//!      ↓
//! ┌──────────────────────────────────────────────────────────┐
//! │                    DATA ORCHESTRATOR                     │
//! │                                                          │
//! │  1. Handshake with host (or inject simulated ticket)     │
//! │         ↓                                                │
//! │  2. Load ticket                                          │
//! │         ↓  requester email non-empty                     │
//! │  3. Look up customer by email                            │
//! │         ↓  profile present                               │
//! │  4. Load recent posts (capped)                           │
//! │                                                          │
//! │  Every write is checked against the resource's latest    │
//! │  request token before it lands in the snapshot.          │
//! └──────────────────────────────────────────────────────────┘
//!          ↓
//! PanelSnapshot (watch channel) → view, DraftDriver → DraftScheduler
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use panel_orchestrator::{DataOrchestrator, OrchestratorConfig, PanelView};
//! use directory_client::HttpDirectoryClient;
//! use host_bridge::SimulatedHost;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let directory = HttpDirectoryClient::from_env()?;
//!     let orchestrator =
//!         DataOrchestrator::new(SimulatedHost, directory, OrchestratorConfig::development());
//!
//!     orchestrator.initialize().await;
//!
//!     let snapshot = orchestrator.snapshot();
//!     assert_eq!(snapshot.view(), PanelView::Ready);
//!     Ok(())
//! }
//! ```

mod config;
mod drafts;
mod error;
mod orchestrator;
mod snapshot;
mod tokens;

// Public exports
pub use config::{OrchestratorConfig, DEFAULT_HANDSHAKE_TIMEOUT, DEFAULT_POSTS_LIMIT};
pub use drafts::DraftDriver;
pub use error::OrchestratorError;
pub use orchestrator::{DataOrchestrator, HANDSHAKE_TIMEOUT_MESSAGE};
pub use snapshot::{PanelSnapshot, PanelView};

// Re-export commonly used types from dependencies
pub use panel_core::{AppError, ErrorKind, HostContext, ResourceKind, ResourceState};
