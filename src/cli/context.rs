//! Config management CLI arguments (kubectl-style)

use clap::{Parser, Subcommand};

/// Config subcommands for inspecting and switching contexts
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Display config file contents with passwords masked
    View,

    /// List configured contexts
    #[command(name = "get-contexts")]
    GetContexts,

    /// Display the active context
    #[command(name = "current-context")]
    CurrentContext,

    /// Set the default context in the config file
    #[command(name = "use-context")]
    UseContext(UseContextArgs),
}

/// Arguments for 'config use-context' subcommand
#[derive(Parser, Debug)]
pub struct UseContextArgs {
    /// Context name to activate
    pub name: String,
}
