//! Customer directory HTTP client.
//!
//! This crate is the panel's only network boundary to the customer
//! directory. It supports:
//!
//! - Looking up a customer profile by email
//! - Listing a customer's most recent posts, capped to a limit
//! - A fixed per-call timeout with failure classification into [`AppError`]
//!
//! Every call is a single attempt. Retries are the caller's decision.
//!
//! # Example
//!
//! ```no_run
//! use directory_client::{DirectoryConfig, HttpDirectoryClient};
//! use panel_core::CustomerDirectory;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpDirectoryClient::new(DirectoryConfig::default())?;
//!
//! if let Some(profile) = client.lookup_by_email("Sincere@april.biz").await? {
//!     let posts = client.list_posts(profile.id, 3).await?;
//!     println!("{} has {} recent posts", profile.name, posts.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`AppError`]: panel_core::AppError

pub mod client;
pub mod config;
pub mod error;

pub use client::HttpDirectoryClient;
pub use config::{DirectoryConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::DirectoryError;
