//! Game command implementation.

use crate::cli::GameArgs;
use crate::config::Config;
use crate::error::Result;
use crate::input::{read_json, SessionFile};
use crate::output::Formatter;
use crate::tables;
use trajectory_domain::session::answers_from_events;
use trajectory_domain::{GameEvent, GameSession, Label, Report};
use trajectory_gatekeeper::{Gatekeeper, GatekeeperError, ValidationStatus};

/// Execute the game command.
pub fn execute_game(args: GameArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let file: SessionFile = read_json(&args.session)?;
    let (session, events) = file.into_domain();
    if session.completed_at.is_none() {
        tracing::warn!(session = %session.id, "session not completed");
    }

    intake_session(&session, &events, formatter)?;

    let engine = tables::game_engine(args.tables.as_deref().or(config.tables.game.as_deref()))?;
    let report = engine.assess(&session, &events);
    tracing::info!(
        session = %session.id,
        label = report.lane().as_str(),
        confidence = report.confidence,
        badges = report.badges.len(),
        "game session scored"
    );

    let answers = answers_from_events(&events);
    let report = Report::Game(report);
    println!("{}", formatter.format_report(&report)?);

    if let Some(path) = &args.save {
        let module = args.module.as_deref().unwrap_or(&config.settings.module_id);
        super::save_record(path, module, answers, report, formatter)?;
    }

    Ok(())
}

/// Validate a session, printing every rejection reason before failing.
fn intake_session(session: &GameSession, events: &[GameEvent], formatter: &Formatter) -> Result<()> {
    let result = Gatekeeper::default_config().validate_session(session, events);
    if result.status == ValidationStatus::Rejected {
        eprintln!("{}", formatter.format_rejections(&result.reasons));
        return Err(GatekeeperError::Rejected {
            reasons: result.reasons,
        }
        .into());
    }
    if result.completeness < 1.0 {
        tracing::warn!(completeness = result.completeness, "session has unanswered events");
    }
    Ok(())
}
