//! Mock collaborators for testing the panel orchestrator.
//!
//! This crate provides in-memory implementations of the panel's seams:
//! - `ScriptedHost` - Host with a scripted handshake and ticket
//! - `InMemoryDirectory` - Directory backed by vectors, recording every call
//! - `DelayedDirectory` - Wraps another directory with per-call delays
//! - `RecordingClipboard` - Clipboard that remembers what was copied
//!
//! # Example
//!
//! ```rust
//! use mock_host::{InMemoryDirectory, DirectoryCall};
//! use panel_core::{CustomerDirectory, CustomerProfile};
//!
//! #[tokio::main]
//! async fn main() {
//!     let directory = InMemoryDirectory::new()
//!         .with_profile("a@b.com", CustomerProfile::new(1, "Ada"));
//!
//!     let profile = directory.lookup_by_email("a@b.com").await.unwrap();
//!     assert_eq!(profile.unwrap().name, "Ada");
//!     assert_eq!(directory.calls(), vec![DirectoryCall::Lookup("a@b.com".to_string())]);
//! }
//! ```

mod clipboard;
mod delayed;
mod directory;
mod host;

// Re-export panel-core types for convenience
pub use panel_core::{async_trait, AppError, Clipboard, CustomerDirectory, HostBridge};

pub use clipboard::RecordingClipboard;
pub use delayed::DelayedDirectory;
pub use directory::{DirectoryCall, InMemoryDirectory};
pub use host::{Handshake, ScriptedHost};
