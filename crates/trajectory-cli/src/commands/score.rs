//! Score command implementation.

use crate::cli::{ScoreArgs, ScoreVariant};
use crate::config::Config;
use crate::error::Result;
use crate::input::{read_json, Submission};
use crate::output::Formatter;
use crate::tables;
use std::collections::BTreeMap;
use std::path::Path;
use trajectory_domain::{AnswerSet, Category, LaneCategory, LifeDomain, QuestionMap, Report};
use trajectory_gatekeeper::{Gatekeeper, GatekeeperError, IntakeConfig, QuestionBank, ValidationStatus};

/// Execute the score command.
pub fn execute_score(args: ScoreArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let submission: Submission = read_json(&args.answers)?;
    let (answers, report) = score_submission(&args, config, submission.answers(), formatter)?;

    tracing::info!(
        kind = report.kind(),
        label = report.label(),
        overall = report.overall(),
        "submission scored"
    );
    println!("{}", formatter.format_report(&report)?);

    if let Some(path) = &args.save {
        let module = args.module.as_deref().unwrap_or(&config.settings.module_id);
        super::save_record(path, module, answers, report, formatter)?;
    }

    Ok(())
}

fn score_submission(
    args: &ScoreArgs,
    config: &Config,
    raw: &BTreeMap<String, i64>,
    formatter: &Formatter,
) -> Result<(AnswerSet, Report)> {
    let intake = if args.strict {
        IntakeConfig::strict()
    } else {
        IntakeConfig::default()
    };

    match args.variant {
        ScoreVariant::Life => {
            let gatekeeper = Gatekeeper::new(intake);
            let mut engine = tables::life_engine(args.tables.as_deref().or(config.tables.life.as_deref()))?;
            if let Some(path) = &args.questions {
                engine.profile.question_map = load_bank::<LifeDomain>(path, &gatekeeper)?;
            }
            let answers = intake_answers(&gatekeeper, raw, &engine.profile.question_map, formatter)?;
            let report = engine.assess(&answers);
            tracing::debug!(lowest = ?report.lowest_two, confidence = report.card.confidence, "life assessment");
            Ok((answers, Report::Life(report)))
        }
        ScoreVariant::Lane => {
            let gatekeeper = Gatekeeper::new(intake.with_bank_counts(18, 0));
            let mut engine = tables::lane_engine(args.tables.as_deref().or(config.tables.lane.as_deref()))?;
            if let Some(path) = &args.questions {
                engine.profile.question_map = load_bank::<LaneCategory>(path, &gatekeeper)?;
            }
            let answers = intake_answers(&gatekeeper, raw, &engine.profile.question_map, formatter)?;
            let report = engine.assess(&answers);
            tracing::debug!(
                forced_by = ?report.card.classification.forced_by,
                growth = report.growth_potential.as_str(),
                "lane diagnostic"
            );
            Ok((answers, Report::Lane(report)))
        }
    }
}

fn load_bank<C: Category>(path: &Path, gatekeeper: &Gatekeeper) -> Result<QuestionMap<C>> {
    let bank = QuestionBank::from_file(path)?;
    Ok(gatekeeper.accept_question_bank::<C>(&bank)?)
}

/// Validate raw answers, printing every rejection reason before failing.
fn intake_answers<C: Category>(
    gatekeeper: &Gatekeeper,
    raw: &BTreeMap<String, i64>,
    question_map: &QuestionMap<C>,
    formatter: &Formatter,
) -> Result<AnswerSet> {
    let result = gatekeeper.validate_answers(raw, question_map);
    if result.status == ValidationStatus::Rejected {
        eprintln!("{}", formatter.format_rejections(&result.reasons));
        return Err(GatekeeperError::Rejected {
            reasons: result.reasons,
        }
        .into());
    }
    if result.completeness < 1.0 {
        tracing::warn!(completeness = result.completeness, "partial submission scored");
    }
    Ok(gatekeeper.accept(raw, question_map)?)
}
