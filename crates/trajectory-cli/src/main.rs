//! Trajectory CLI - Score life and lane assessments from the command line.

use anyhow::Context;
use clap::Parser;
use trajectory_cli::commands;
use trajectory_cli::{telemetry, Cli, Command, Config, Formatter};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config; a missing default file yields the defaults
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    telemetry::init(cli.log_level.as_deref(), &config.settings.log_level);
    tracing::debug!(?config, "configuration loaded");

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Handle commands
    match cli.command {
        Command::Score(args) => commands::execute_score(args, &config, &formatter)?,
        Command::Game(args) => commands::execute_game(args, &config, &formatter)?,
        Command::Confidence(args) => commands::execute_confidence(args, &formatter)?,
        Command::Roadmap(args) => commands::execute_roadmap(args, &formatter)?,
        Command::ValidateQuestions(args) => commands::execute_validate(args, &formatter)?,
        Command::Tables(args) => commands::execute_tables(args, &config, &formatter)?,
        Command::History(args) => commands::execute_history(args, &formatter)?,
        Command::Config(args) => {
            commands::execute_config(args, &config, cli.config.as_deref(), &formatter)?
        }
    }

    Ok(())
}
