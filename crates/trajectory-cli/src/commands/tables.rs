//! Tables command implementation.

use crate::cli::{TablesArgs, VariantArg};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::tables;

/// Execute the tables command.
///
/// `--file` takes precedence over the table file named in the configuration.
pub fn execute_tables(args: TablesArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let output = match args.variant {
        VariantArg::Life => {
            let engine = tables::life_engine(args.file.as_deref().or(config.tables.life.as_deref()))?;
            formatter.format_profile(&engine.profile)?
        }
        VariantArg::Lane => {
            let engine = tables::lane_engine(args.file.as_deref().or(config.tables.lane.as_deref()))?;
            formatter.format_profile(&engine.profile)?
        }
        VariantArg::Game => {
            let engine = tables::game_engine(args.file.as_deref().or(config.tables.game.as_deref()))?;
            formatter.format_profile(&engine.profile)?
        }
    };

    println!("{}", output);
    Ok(())
}
