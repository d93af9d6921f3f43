//! Clipboard writes through platform tools.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crate::bridge::ClipboardWriter;
use crate::error::ClipboardError;

/// Clipboard tools tried in order. The first one that starts is used.
pub const DEFAULT_COMMANDS: &[&[&str]] = &[
    &["pbcopy"],
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
    &["clip"],
];

/// Pipes text into the first available clipboard tool.
#[derive(Debug, Clone)]
pub struct CommandWriter {
    commands: Vec<Vec<String>>,
}

impl CommandWriter {
    /// Use a custom list of commands (program followed by its arguments).
    pub fn with_commands(commands: Vec<Vec<String>>) -> Self {
        Self { commands }
    }

    async fn run(program: &str, args: &[String], text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            let written = match stdin.write_all(text.as_bytes()).await {
                Ok(()) => stdin.shutdown().await,
                Err(e) => Err(e),
            };
            if let Err(e) = written {
                debug!("Writing to {} failed: {}", program, e);
                let _ = child.kill().await;
                return Err(e.into());
            }
        }

        let status = child.wait().await?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::ToolFailed {
                tool: program.to_string(),
                status: status.to_string(),
            })
        }
    }
}

impl Default for CommandWriter {
    fn default() -> Self {
        Self::with_commands(
            DEFAULT_COMMANDS
                .iter()
                .map(|cmd| cmd.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }
}

#[async_trait]
impl ClipboardWriter for CommandWriter {
    async fn write(&self, text: &str) -> Result<(), ClipboardError> {
        for command in &self.commands {
            let Some((program, args)) = command.split_first() else {
                continue;
            };

            match Self::run(program, args, text).await {
                Ok(()) => return Ok(()),
                Err(ClipboardError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                    debug!("Clipboard tool {} not installed", program);
                }
                Err(e) => return Err(e),
            }
        }
        Err(ClipboardError::NoTool)
    }

    fn name(&self) -> &str {
        "CommandWriter"
    }
}
