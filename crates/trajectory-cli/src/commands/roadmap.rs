//! Roadmap command implementation.

use crate::cli::RoadmapArgs;
use crate::error::Result;
use crate::output::Formatter;
use trajectory_domain::recommend::transition_roadmap;
use trajectory_domain::Lane;

/// Execute the roadmap command.
pub fn execute_roadmap(args: RoadmapArgs, formatter: &Formatter) -> Result<()> {
    let current = Lane::from(args.from);
    let target = Lane::from(args.to);
    let steps = transition_roadmap(current, target);

    println!("{}", formatter.format_roadmap(current, target, &steps)?);
    Ok(())
}
