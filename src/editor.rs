//! External editor invocation.
//! The bridge spawns the configured editor over a file and blocks until it
//! exits, with the interactive streams of the current process attached.
//! Nothing the editor prints is interpreted here; the caller re-reads the
//! file from disk afterwards.

use crate::error::{Error, Result};
use log::debug;
use std::path::Path;
use std::process::{Command, Stdio};

/// Trait for invoking an interactive editor over a file.
pub trait EditorBridge {
    /// Runs `command` with `file` as its single argument and waits for it
    /// to exit.
    fn edit(&self, command: &str, file: &Path) -> Result<()>;
}

/// Editor bridge that spawns the editor as a blocking child process.
pub struct CommandEditor;

impl EditorBridge for CommandEditor {
    fn edit(&self, command: &str, file: &Path) -> Result<()> {
        if command.is_empty() {
            return Err(Error::EditorError(
                "no editor configured; set $EDITOR or pass --editor".to_string(),
            ));
        }

        debug!("Invoking '{}' on {}", command, file.display());

        let status = Command::new(command)
            .arg(file)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| {
                Error::EditorError(format!("failed to launch '{}': {}", command, e))
            })?;

        if !status.success() {
            return Err(Error::EditorError(format!(
                "'{}' exited with {}",
                command, status
            )));
        }

        Ok(())
    }
}
