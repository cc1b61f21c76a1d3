//! CLI argument parsing

mod common;
mod context;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{defaults, env};
use crate::output::OutputOptions;

pub use common::OutputFormat;
pub use context::{ConfigAction, UseContextArgs};

/// sigmactl command line
#[derive(Parser, Debug)]
#[command(name = "sigmactl")]
#[command(version)]
#[command(about = "Manage your CloudSigma account from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Context to use (defaults to the config file's 'context', then 'default')
    #[arg(long, global = true)]
    pub context: Option<String>,

    /// Config file path
    #[arg(long, global = true, env = env::CONFIG)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Omit headers in table and CSV output
    #[arg(long, global = true, default_value_t = false)]
    pub no_header: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Disable progress spinners
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,
}

impl Cli {
    pub fn output_options(&self) -> OutputOptions {
        OutputOptions {
            format: self.output,
            no_header: self.no_header,
            quiet: self.quiet,
        }
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Authenticate sigmactl with your CloudSigma account
    #[command(subcommand)]
    Auth(AuthAction),

    /// Show the account balance
    #[command(subcommand)]
    Balance(BalanceAction),

    /// Explore CloudSigma regions
    #[command(subcommand)]
    Region(RegionAction),

    /// Explore servers
    #[command(subcommand)]
    Server(ServerAction),

    /// Inspect and switch contexts
    #[command(subcommand)]
    Config(ConfigAction),
}

/// Auth subcommands
#[derive(Subcommand, Debug)]
pub enum AuthAction {
    /// Set up your authentication credentials
    #[command(
        long_about = "Store the account password for the active context so you don't \
                      have to enter it for every request.\n\n\
                      The password is validated against the API before it is written to \
                      the config file."
    )]
    Init,
}

/// Balance subcommands
#[derive(Subcommand, Debug)]
pub enum BalanceAction {
    /// Get the current account balance
    Get,
}

/// Region subcommands
#[derive(Subcommand, Debug)]
pub enum RegionAction {
    /// List available regions
    #[command(visible_alias = "ls")]
    List,
}

/// Server subcommands
#[derive(Subcommand, Debug)]
pub enum ServerAction {
    /// List servers
    #[command(visible_alias = "ls")]
    List,
}
