//! Authentication module
//!
//! `auth init` resolves the active context's password, prompts for one when
//! none is stored, validates it against the API and writes it to the config
//! file.

mod flow;
mod prompt;

pub use flow::run_auth_init;
pub use prompt::{SecretReader, TerminalSecretReader};
