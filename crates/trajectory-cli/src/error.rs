//! Error types for the CLI application.

use thiserror::Error;
use trajectory_domain::ConfigDefect;
use trajectory_gatekeeper::GatekeeperError;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Scoring table defect
    #[error("Scoring tables: {0}")]
    Tables(#[from] ConfigDefect),

    /// Intake validation failure
    #[error(transparent)]
    Gatekeeper(#[from] GatekeeperError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
