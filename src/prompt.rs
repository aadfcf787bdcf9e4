//! User interaction for the edit-retry loop.

use crate::error::Result;
use dialoguer::Input;
use std::io;

/// Trait for pausing on a decode failure until the user is ready to retry.
pub trait Prompter {
    /// Reports a decode failure and blocks until the user acknowledges it.
    fn acknowledge(&self, message: &str) -> Result<()>;
}

/// Dialoguer-backed prompter used by the CLI.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn acknowledge(&self, message: &str) -> Result<()> {
        eprintln!("Error while parsing file: {}", message);
        Input::<String>::new()
            .with_prompt("Press Enter to edit again")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| io::Error::other(e))?;
        Ok(())
    }
}
