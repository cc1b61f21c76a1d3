//! Context management module
//!
//! Named contexts select which stored password a command runs with. The
//! `default` context lives in its own slot of the config document, every
//! other context in the `auth-contexts` map.

mod commands;
mod credentials;
mod models;
mod resolve;
mod store;

pub use commands::run_config_command;
pub use credentials::{mask_password, CredentialStore, Password, ProfileEntry};
pub use models::Config;
pub use resolve::{resolve_active_profile, Profile};
pub use store::ConfigStore;
