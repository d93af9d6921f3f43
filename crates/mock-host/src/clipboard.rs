//! Recording clipboard implementation.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use panel_core::Clipboard;

/// A clipboard that records copied text and can be told to fail.
#[derive(Debug, Clone, Default)]
pub struct RecordingClipboard {
    copied: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl RecordingClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard on which every copy fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Everything copied so far.
    pub fn copied(&self) -> Vec<String> {
        self.copied.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }
}

#[async_trait]
impl Clipboard for RecordingClipboard {
    async fn copy(&self, text: &str) -> bool {
        if self.fail {
            return false;
        }
        self.copied
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push(text.to_string());
        true
    }
}
