//! Analyze command implementation.

use crate::chart::write_chart;
use crate::cli::AnalyzeArgs;
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::input::read_intervals;
use crate::output::Formatter;
use intermedian_domain::analyze;
use tracing::info;

/// Execute the analyze command.
///
/// The chart is written only after every estimator succeeded.
pub fn execute_analyze(args: AnalyzeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let tolerance = args.tolerance.resolve(&config.tolerance)?;

    let intervals = read_intervals(&args.file)?;
    if intervals.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "No intervals found in '{}'",
            args.file.display()
        )));
    }
    info!(count = intervals.len(), file = %args.file.display(), "analyzing intervals");

    let analysis = analyze(&intervals, &tolerance)?;

    println!("{}", formatter.format_analysis(&intervals, &analysis)?);

    if args.no_chart || (!config.chart.enabled && args.chart.is_none()) {
        return Ok(());
    }

    let path = args.chart.unwrap_or_else(|| config.chart.output.clone());
    write_chart(&path, &intervals, &analysis, &config.chart.title)?;

    let message = formatter.success(&format!("Chart written to {}", path.display()));
    match formatter.format() {
        OutputFormat::Table => println!("{}", message),
        OutputFormat::Json | OutputFormat::Quiet => eprintln!("{}", message),
    }

    Ok(())
}
