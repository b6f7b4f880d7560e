//! Command implementations.

pub mod confidence;
pub mod config;
pub mod game;
pub mod history;
pub mod roadmap;
pub mod score;
pub mod tables;
pub mod validate;

pub use self::confidence::execute_confidence;
pub use self::config::execute_config;
pub use self::game::execute_game;
pub use self::history::execute_history;
pub use self::roadmap::execute_roadmap;
pub use self::score::execute_score;
pub use self::tables::execute_tables;
pub use self::validate::execute_validate;

use crate::error::Result;
use crate::output::Formatter;
use crate::store::JsonlStore;
use std::path::Path;
use trajectory_domain::{AnswerSet, Report, ResultRecord, ResultStore};

/// Append a result record to a JSON Lines store.
pub(crate) fn save_record(
    path: &Path,
    module_id: &str,
    answers: AnswerSet,
    report: Report,
    formatter: &Formatter,
) -> Result<()> {
    let record = ResultRecord::new(module_id, answers, report);
    let mut store = JsonlStore::new(path);
    store.persist(&record)?;
    eprintln!("{}", formatter.record_saved(&record, store.path()));
    Ok(())
}
