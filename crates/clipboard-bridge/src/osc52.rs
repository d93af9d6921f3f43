//! OSC 52 terminal selection writes.

use std::io::{IsTerminal, Write};
use std::sync::Mutex;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::bridge::ClipboardWriter;
use crate::error::ClipboardError;

/// Asks the terminal to place text on the clipboard via the OSC 52 sequence.
pub struct Osc52Writer {
    sink: Mutex<Box<dyn Write + Send>>,
    require_terminal: bool,
}

impl Osc52Writer {
    /// Write to stdout; fails if stdout is not a terminal.
    pub fn stdout() -> Self {
        Self {
            sink: Mutex::new(Box::new(std::io::stdout())),
            require_terminal: true,
        }
    }

    /// Write to an arbitrary sink.
    pub fn with_sink(sink: impl Write + Send + 'static) -> Self {
        Self {
            sink: Mutex::new(Box::new(sink)),
            require_terminal: false,
        }
    }

    /// Build the escape sequence for `text`.
    pub fn sequence(text: &str) -> String {
        format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))
    }
}

#[async_trait]
impl ClipboardWriter for Osc52Writer {
    async fn write(&self, text: &str) -> Result<(), ClipboardError> {
        if self.require_terminal && !std::io::stdout().is_terminal() {
            return Err(ClipboardError::NotATerminal);
        }

        let mut sink = self
            .sink
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        sink.write_all(Self::sequence(text).as_bytes())?;
        sink.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "Osc52Writer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sequence() {
        assert_eq!(Osc52Writer::sequence("hi"), "\x1b]52;c;aGk=\x07");
    }

    #[tokio::test]
    async fn test_writes_sequence_to_sink() {
        let buf = SharedBuf::default();
        let writer = Osc52Writer::with_sink(buf.clone());

        writer.write("hi").await.unwrap();
        let written = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert_eq!(written, "\x1b]52;c;aGk=\x07");
    }
}
