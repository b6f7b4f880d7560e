//! Confidence command implementation.

use crate::cli::ConfidenceArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use trajectory_domain::confidence::behavioral_confidence;
use trajectory_domain::{BehavioralPolicy, ConfidenceFactors};

/// Execute the confidence command.
pub fn execute_confidence(args: ConfidenceArgs, formatter: &Formatter) -> Result<()> {
    if !args.avg_answer_ms.is_finite() || args.avg_answer_ms < 0.0 {
        return Err(CliError::InvalidInput(format!(
            "avg-answer-ms must be a non-negative number, got {}",
            args.avg_answer_ms
        )));
    }
    if !(0.0..=1.0).contains(&args.consistency) {
        return Err(CliError::InvalidInput(format!(
            "consistency must be between 0.0 and 1.0, got {}",
            args.consistency
        )));
    }

    let factors = ConfidenceFactors {
        avg_answer_ms: args.avg_answer_ms,
        answer_changes: args.changes,
        timeouts: args.timeouts,
        validation_consistency: args.consistency,
    };
    let confidence = behavioral_confidence(&factors, &BehavioralPolicy::default());
    tracing::debug!(confidence, "behavioral confidence");

    println!("{}", formatter.format_confidence(&factors, confidence)?);
    Ok(())
}
