//! Regions (CloudSigma locations) module

mod api;
mod commands;
mod models;

pub use api::RegionsService;
pub use commands::run_region_command;
pub use models::Region;
