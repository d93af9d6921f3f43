//! Ticketing host bridge.
//!
//! The panel runs inside a host ticketing platform. This crate provides:
//!
//! - [`HttpHostBridge`] - Handshake polling and ticket data reads over HTTP
//! - [`SimulatedHost`] - A host that always answers with the simulated ticket
//! - [`detect_context`] - Development detection from the panel URL
//!
//! The handshake itself may never complete when the panel is opened outside
//! a host; bounding it is the orchestrator's job.

pub mod config;
pub mod context;
pub mod error;
pub mod http;
pub mod simulated;

pub use config::{HostConfig, DEFAULT_HANDSHAKE_TIMEOUT, DEFAULT_HOST_URL, DEFAULT_POLL_INTERVAL};
pub use context::detect_context;
pub use error::HostError;
pub use http::HttpHostBridge;
pub use simulated::SimulatedHost;
