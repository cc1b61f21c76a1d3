//! sigmactl - Manage a CloudSigma account from the command line
//!
//! Credentials are kept per context in a YAML config file. Every command
//! resolves the active context's password once and builds the API clients it
//! needs from it.
//!
//! # Example
//!
//! ```bash
//! # Store and validate the password of the default context
//! sigmactl auth init
//!
//! # Same for a named context
//! sigmactl --context staging auth init
//!
//! # Show the account balance as JSON
//! sigmactl balance get -o json
//!
//! # List servers of the staging account
//! sigmactl --context staging server list
//! ```

pub mod auth;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod invocation;
pub mod output;
pub mod sigma;
pub mod ui;

pub use auth::{run_auth_init, SecretReader, TerminalSecretReader};
pub use cli::{
    AuthAction, BalanceAction, Cli, Command, ConfigAction, OutputFormat, RegionAction,
    ServerAction,
};
pub use context::{
    run_config_command, Config, ConfigStore, CredentialStore, Password, Profile,
};
pub use error::{Result, SigmaError};
pub use invocation::Invocation;
pub use output::OutputOptions;
pub use sigma::{
    run_balance_command, run_region_command, run_server_command, Balance, ClientSettings,
    Region, Server, ServiceLocator, Services,
};
