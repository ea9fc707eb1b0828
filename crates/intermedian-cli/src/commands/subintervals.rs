//! Subintervals command implementation.

use crate::cli::SubintervalsArgs;
use crate::config::Config;
use crate::error::Result;
use crate::input::read_intervals;
use crate::output::Formatter;
use intermedian_domain::{calculate_frequencies, generate_subintervals};
use tracing::warn;

/// Execute the subintervals command.
///
/// An empty partition is reported as a warning; it is not an error here.
pub fn execute_subintervals(
    args: SubintervalsArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let tolerance = args.tolerance.resolve(&config.tolerance)?;
    let intervals = read_intervals(&args.file)?;

    let subintervals = generate_subintervals(&intervals, &tolerance)?;
    let frequencies = calculate_frequencies(&intervals, &subintervals, &tolerance);

    if subintervals.is_empty() {
        warn!(count = intervals.len(), "fewer than two distinct breakpoints");
        eprintln!(
            "{}",
            formatter.warning("Fewer than two distinct breakpoints; the partition is empty")
        );
    }

    println!("{}", formatter.format_partition(&subintervals, &frequencies)?);

    Ok(())
}
