//! Validate-questions command implementation.

use crate::cli::{ScoreVariant, ValidateArgs};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use trajectory_domain::{LaneCategory, LifeDomain};
use trajectory_gatekeeper::{Gatekeeper, IntakeConfig, QuestionBank};

/// Execute the validate-questions command.
///
/// Prints every issue found and fails when there is at least one.
pub fn execute_validate(args: ValidateArgs, formatter: &Formatter) -> Result<()> {
    let bank = QuestionBank::from_file(&args.file)?;

    let (default_scored, default_reflective) = match args.variant {
        ScoreVariant::Life => (15, 2),
        ScoreVariant::Lane => (18, 0),
    };
    let base = if args.permissive {
        IntakeConfig::permissive()
    } else {
        IntakeConfig::default()
    };
    let scored = args.scored.unwrap_or(default_scored);
    let reflective = args.reflective.unwrap_or(default_reflective);
    let gatekeeper = Gatekeeper::new(base.with_bank_counts(scored, reflective));

    let issues = match args.variant {
        ScoreVariant::Life => gatekeeper.validate_question_bank::<LifeDomain>(&bank),
        ScoreVariant::Lane => gatekeeper.validate_question_bank::<LaneCategory>(&bank),
    };

    println!("{}", formatter.format_bank_issues(&issues, scored, reflective)?);

    if issues.is_empty() {
        tracing::info!(path = %args.file.display(), "question bank valid");
        Ok(())
    } else {
        Err(CliError::InvalidInput(format!(
            "{} has {} issue(s)",
            args.file.display(),
            issues.len()
        )))
    }
}
