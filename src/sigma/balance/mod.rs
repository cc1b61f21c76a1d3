//! Account balance module

mod api;
mod commands;
mod models;

pub use api::BalanceService;
pub use commands::run_balance_command;
pub use models::Balance;
