//! Terminal secret input

use dialoguer::{theme::ColorfulTheme, Password};
use log::debug;
use std::io::IsTerminal;

use crate::error::{Result, SigmaError};

/// Source of a secret typed by the operator
pub trait SecretReader {
    /// Whether a prompt can be shown at all
    fn is_interactive(&self) -> bool;

    /// Read one secret without echoing it
    fn read_secret(&self, prompt: &str) -> Result<String>;
}

/// Reads from the controlling terminal with echo disabled
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalSecretReader;

impl SecretReader for TerminalSecretReader {
    fn is_interactive(&self) -> bool {
        let stdout = std::io::stdout().is_terminal();
        let stdin = std::io::stdin().is_terminal();
        debug!("TTY detection: stdout={}, stdin={}", stdout, stdin);
        stdout && stdin
    }

    fn read_secret(&self, prompt: &str) -> Result<String> {
        if !self.is_interactive() {
            return Err(SigmaError::UnknownTerminal);
        }

        Password::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .map_err(|e| SigmaError::Prompt(e.to_string()))
    }
}
