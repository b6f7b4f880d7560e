//! History command implementation.

use crate::cli::HistoryArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::store::JsonlStore;

/// Execute the history command.
pub fn execute_history(args: HistoryArgs, formatter: &Formatter) -> Result<()> {
    let store = JsonlStore::new(args.store);
    let mut records = store.records()?;

    if let Some(module) = &args.module {
        records.retain(|r| r["module_id"].as_str() == Some(module.as_str()));
    }
    if let Some(limit) = args.limit {
        let skip = records.len().saturating_sub(limit);
        records.drain(..skip);
    }

    println!("{}", formatter.format_history(&records)?);
    Ok(())
}
