//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use trajectory_domain::Lane;

/// Trajectory CLI - Score life and lane assessments.
#[derive(Debug, Parser)]
#[command(name = "trajectory")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter (e.g. debug, trajectory_gatekeeper=debug)
    #[arg(long, global = true, env = "TRAJECTORY_LOG")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (label only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score a questionnaire submission
    Score(ScoreArgs),

    /// Score a recorded lane game session
    Game(GameArgs),

    /// Compute behavioral confidence from raw factors
    Confidence(ConfidenceArgs),

    /// Show the steps for moving between lanes
    Roadmap(RoadmapArgs),

    /// Validate a question bank file
    ValidateQuestions(ValidateArgs),

    /// Show the scoring tables in effect
    Tables(TablesArgs),

    /// List saved result records
    History(HistoryArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the score command.
#[derive(Debug, Parser)]
pub struct ScoreArgs {
    /// Assessment to score
    #[arg(value_enum)]
    pub variant: ScoreVariant,

    /// Submission JSON file, or `-` for stdin
    #[arg(default_value = "-")]
    pub answers: String,

    /// Scoring table file replacing the built-in tables
    #[arg(short, long)]
    pub tables: Option<PathBuf>,

    /// Question bank supplying the question map
    #[arg(short, long)]
    pub questions: Option<PathBuf>,

    /// Reject incomplete submissions and unknown question ids
    #[arg(long)]
    pub strict: bool,

    /// Append the result record to this JSON Lines file
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Module id stamped on the saved record
    #[arg(short, long)]
    pub module: Option<String>,
}

/// Arguments for the game command.
#[derive(Debug, Parser)]
pub struct GameArgs {
    /// Session JSON file, or `-` for stdin
    #[arg(default_value = "-")]
    pub session: String,

    /// Scoring table file replacing the built-in tables
    #[arg(short, long)]
    pub tables: Option<PathBuf>,

    /// Append the result record to this JSON Lines file
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Module id stamped on the saved record
    #[arg(short, long)]
    pub module: Option<String>,
}

/// Arguments for the confidence command.
#[derive(Debug, Parser)]
pub struct ConfidenceArgs {
    /// Mean time to answer, in milliseconds
    #[arg(long)]
    pub avg_answer_ms: f64,

    /// Revised answers
    #[arg(long, default_value = "0")]
    pub changes: u32,

    /// Timed-out questions
    #[arg(long, default_value = "0")]
    pub timeouts: u32,

    /// Validation consistency (0.0-1.0)
    #[arg(long, default_value = "1.0")]
    pub consistency: f64,
}

/// Arguments for the roadmap command.
#[derive(Debug, Parser)]
pub struct RoadmapArgs {
    /// Current lane
    #[arg(long, value_enum)]
    pub from: LaneArg,

    /// Target lane
    #[arg(long, value_enum)]
    pub to: LaneArg,
}

/// Arguments for the validate-questions command.
#[derive(Debug, Parser)]
pub struct ValidateArgs {
    /// Question bank JSON file
    pub file: PathBuf,

    /// Category set of the scored questions
    #[arg(short, long, value_enum, default_value = "life")]
    pub variant: ScoreVariant,

    /// Required number of scored questions
    #[arg(long)]
    pub scored: Option<usize>,

    /// Required number of reflective questions
    #[arg(long)]
    pub reflective: Option<usize>,

    /// Accept placeholder prompts
    #[arg(long)]
    pub permissive: bool,
}

/// Arguments for the tables command.
#[derive(Debug, Parser)]
pub struct TablesArgs {
    /// Assessment whose tables to show
    #[arg(short, long, value_enum, default_value = "lane")]
    pub variant: VariantArg,

    /// Scoring table file to apply before showing
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Arguments for the history command.
#[derive(Debug, Parser)]
pub struct HistoryArgs {
    /// JSON Lines result file
    pub store: PathBuf,

    /// Only records of this module
    #[arg(short, long)]
    pub module: Option<String>,

    /// Show at most this many of the newest records
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the configuration in effect
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Questionnaire assessments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ScoreVariant {
    /// Life assessment (Q1-Q15)
    Life,
    /// Lane diagnostic (LD1-LD18)
    Lane,
}

/// Every assessment, including the lane game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum VariantArg {
    /// Life assessment
    Life,
    /// Lane diagnostic
    Lane,
    /// Lane game
    Game,
}

/// Lane argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LaneArg {
    /// Sidewalk
    Sidewalk,
    /// Slowlane
    Slowlane,
    /// Fastlane
    Fastlane,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<LaneArg> for Lane {
    fn from(lane: LaneArg) -> Self {
        match lane {
            LaneArg::Sidewalk => Lane::Sidewalk,
            LaneArg::Slowlane => Lane::Slowlane,
            LaneArg::Fastlane => Lane::Fastlane,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_command() {
        let cli = Cli::parse_from(["trajectory", "score", "lane", "answers.json", "--strict"]);
        match cli.command {
            Command::Score(args) => {
                assert_eq!(args.variant, ScoreVariant::Lane);
                assert_eq!(args.answers, "answers.json");
                assert!(args.strict);
                assert!(args.save.is_none());
            }
            _ => panic!("Expected Score command"),
        }
    }

    #[test]
    fn test_score_defaults_to_stdin() {
        let cli = Cli::parse_from(["trajectory", "--format", "json", "score", "life"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        match cli.command {
            Command::Score(args) => assert_eq!(args.answers, "-"),
            _ => panic!("Expected Score command"),
        }
    }

    #[test]
    fn test_roadmap_command() {
        let cli = Cli::parse_from(["trajectory", "roadmap", "--from", "sidewalk", "--to", "fastlane"]);
        match cli.command {
            Command::Roadmap(args) => {
                assert_eq!(Lane::from(args.from), Lane::Sidewalk);
                assert_eq!(Lane::from(args.to), Lane::Fastlane);
            }
            _ => panic!("Expected Roadmap command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["trajectory", "tables", "--variant", "game", "--no-color"]);
        assert!(cli.no_color);
        assert!(matches!(
            cli.command,
            Command::Tables(TablesArgs { variant: VariantArg::Game, .. })
        ));
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        assert!(Cli::try_parse_from(["trajectory", "score", "career"]).is_err());
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Quiet.into();
        assert_eq!(format, crate::config::OutputFormat::Quiet);
    }
}
