//! Clipboard access for copying reply drafts.
//!
//! [`ClipboardBridge`] tries a primary writer and falls back to a second one.
//! It reports success as a `bool` and never returns an error:
//!
//! - [`CommandWriter`] - Pipes text into the platform clipboard tool
//! - [`Osc52Writer`] - Emits the OSC 52 terminal selection sequence

mod bridge;
mod command;
mod error;
mod osc52;

pub use bridge::{ClipboardBridge, ClipboardWriter};
pub use command::{CommandWriter, DEFAULT_COMMANDS};
pub use error::ClipboardError;
pub use osc52::Osc52Writer;
