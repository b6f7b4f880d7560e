//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::{Path, PathBuf};

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    explicit: Option<&Path>,
    formatter: &Formatter,
) -> Result<()> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => Config::path()?,
    };

    match args.action {
        ConfigAction::Show => show_config(config, formatter),
        ConfigAction::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigAction::Init { force } => init_config(path, force, formatter),
    }
}

/// Print the configuration in effect.
fn show_config(config: &Config, formatter: &Formatter) -> Result<()> {
    match formatter.format() {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
        _ => {
            let text = toml::to_string_pretty(config)
                .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
            println!("{}", text.trim_end());
        }
    }
    Ok(())
}

/// Write the default configuration.
fn init_config(path: PathBuf, force: bool, formatter: &Formatter) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save_to(&path)?;
    println!(
        "{}",
        formatter.success(&format!("Wrote default configuration to {}", path.display()))
    );
    Ok(())
}
