//! Servers module

mod api;
mod commands;
mod models;

pub use api::ServersService;
pub use commands::run_server_command;
pub use models::Server;
