//! Trajectory CLI library.
//!
//! Command-line front end of the Trajectory scoring engine: reads
//! submissions and game sessions, validates them through the gatekeeper,
//! scores them and prints or saves the resulting reports.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod store;
pub mod tables;
pub mod telemetry;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use store::JsonlStore;
