//! Reply drafting for the customer intelligence panel.
//!
//! This crate turns fetched panel data into reply text:
//!
//! - [`compose`] - Pure, deterministic template rendering
//! - [`clean_text`] / [`truncate_chars`] - Text helpers used by the templates
//! - [`DraftScheduler`] - Delayed recomputation where the latest trigger wins
//!
//! # Example
//!
//! ```rust
//! use panel_core::{ReplyTone, TicketRecord};
//! use reply_composer::compose;
//!
//! let ticket = TicketRecord::new("a@b.com", "<b>Help</b>", "My order is late");
//! let draft = compose(&ticket, None, &[], ReplyTone::Concise);
//!
//! assert!(draft.text.starts_with("Hi Customer,"));
//! assert!(draft.text.contains("\"Help\""));
//! ```

mod composer;
mod scheduler;
mod template;
mod text;

pub use composer::{compose, DraftInputs, DEFAULT_CUSTOMER_NAME, DESCRIPTION_LIMIT};
pub use scheduler::{DraftScheduler, DEFAULT_DRAFT_DELAY};
pub use text::{clean_text, strip_tags, truncate_chars, ELLIPSIS};
