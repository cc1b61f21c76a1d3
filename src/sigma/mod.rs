//! CloudSigma API client module
//!
//! Capability-scoped services (balance, regions, servers) built on a shared
//! HTTP client and handed out by the [`ServiceLocator`].

pub mod balance;
mod client;
mod models;
pub mod regions;
pub mod servers;
mod services;

pub use balance::{run_balance_command, Balance, BalanceService};
pub use client::{ClientSettings, SigmaClient};
pub use models::{ListMeta, ObjectList};
pub use regions::{run_region_command, Region, RegionsService};
pub use servers::{run_server_command, Server, ServersService};
pub use services::{ServiceLocator, Services};
