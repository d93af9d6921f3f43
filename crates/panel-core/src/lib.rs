//! Core types and traits for the customer intelligence panel.
//!
//! This crate provides the shared vocabulary used by every other crate in the
//! workspace. It defines:
//!
//! - [`TicketRecord`], [`CustomerProfile`], [`CustomerPost`] - The fetched data
//! - [`ResourceState`] - The per-resource state machine value
//! - [`AppError`] - The error currency stored in failed resources
//! - [`HostBridge`], [`CustomerDirectory`], [`Clipboard`] - Collaborator seams
//!
//! # Example
//!
//! ```rust
//! use panel_core::{async_trait, AppError, CustomerDirectory, CustomerPost, CustomerProfile};
//!
//! struct EmptyDirectory;
//!
//! #[async_trait]
//! impl CustomerDirectory for EmptyDirectory {
//!     async fn lookup_by_email(&self, _email: &str) -> Result<Option<CustomerProfile>, AppError> {
//!         Ok(None)
//!     }
//!
//!     async fn list_posts(&self, _customer_id: u64, _limit: usize) -> Result<Vec<CustomerPost>, AppError> {
//!         Ok(Vec::new())
//!     }
//! }
//! ```

mod error;
mod resource;
mod traits;
mod types;

pub use error::{AppError, ErrorKind};
pub use resource::{ResourceKind, ResourceState};
pub use traits::{Clipboard, CustomerDirectory, HostBridge};
pub use types::{
    Address, Company, CustomerPost, CustomerProfile, HostContext, ReplyDraft, ReplyTone,
    TicketRecord,
};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
