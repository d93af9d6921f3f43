//! Primary/fallback clipboard bridge.

use async_trait::async_trait;
use panel_core::Clipboard;
use tracing::{debug, warn};

use crate::command::CommandWriter;
use crate::error::ClipboardError;
use crate::osc52::Osc52Writer;

/// One way of putting text on the clipboard.
#[async_trait]
pub trait ClipboardWriter: Send + Sync {
    /// Write plain text.
    async fn write(&self, text: &str) -> Result<(), ClipboardError>;

    /// Get a human-readable name for this writer.
    fn name(&self) -> &str;
}

/// Clipboard with a fallback path.
pub struct ClipboardBridge {
    primary: Box<dyn ClipboardWriter>,
    fallback: Box<dyn ClipboardWriter>,
}

impl ClipboardBridge {
    /// Create a bridge from two writers.
    pub fn new(
        primary: impl ClipboardWriter + 'static,
        fallback: impl ClipboardWriter + 'static,
    ) -> Self {
        Self {
            primary: Box::new(primary),
            fallback: Box::new(fallback),
        }
    }

    /// Platform clipboard tool first, terminal selection second.
    pub fn system() -> Self {
        Self::new(CommandWriter::default(), Osc52Writer::stdout())
    }
}

#[async_trait]
impl Clipboard for ClipboardBridge {
    async fn copy(&self, text: &str) -> bool {
        match self.primary.write(text).await {
            Ok(()) => {
                debug!("Copied {} chars via {}", text.len(), self.primary.name());
                return true;
            }
            Err(e) => warn!("{} failed, trying {}: {}", self.primary.name(), self.fallback.name(), e),
        }

        match self.fallback.write(text).await {
            Ok(()) => {
                debug!("Copied {} chars via {}", text.len(), self.fallback.name());
                true
            }
            Err(e) => {
                warn!("Failed to copy to clipboard: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct FailingWriter;

    #[async_trait]
    impl ClipboardWriter for FailingWriter {
        async fn write(&self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::NoTool)
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[derive(Clone, Default)]
    struct RecordingWriter {
        written: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl ClipboardWriter for RecordingWriter {
        async fn write(&self, text: &str) -> Result<(), ClipboardError> {
            self.written.lock().unwrap().push(text.to_string());
            Ok(())
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    #[tokio::test]
    async fn test_primary_success_skips_fallback() {
        let primary = RecordingWriter::default();
        let fallback = RecordingWriter::default();
        let bridge = ClipboardBridge::new(primary.clone(), fallback.clone());

        assert!(bridge.copy("hello").await);
        assert_eq!(*primary.written.lock().unwrap(), vec!["hello".to_string()]);
        assert!(fallback.written.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_falls_back_on_primary_failure() {
        let fallback = RecordingWriter::default();
        let bridge = ClipboardBridge::new(FailingWriter, fallback.clone());

        assert!(bridge.copy("draft").await);
        assert_eq!(*fallback.written.lock().unwrap(), vec!["draft".to_string()]);
    }

    #[tokio::test]
    async fn test_both_failing_returns_false() {
        let bridge = ClipboardBridge::new(FailingWriter, FailingWriter);
        assert!(!bridge.copy("draft").await);
    }
}
