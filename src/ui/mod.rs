//! UI utilities for terminal output
//!
//! Progress spinners for commands that wait on the API.

mod spinner;

pub use spinner::{clear_spinner, create_spinner};
