//! CLI command definitions and argument parsing.

use crate::config::ToleranceSettings;
use crate::error::Result;
use clap::{ArgAction, Parser, Subcommand};
use intermedian_domain::Tolerance;
use std::path::PathBuf;

/// Intermedian - Median estimates for interval-valued measurements.
#[derive(Debug, Parser)]
#[command(name = "intermedian")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "INTERMEDIAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (medians only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the three medians of an interval file and chart them
    Analyze(AnalyzeArgs),

    /// Show the subinterval partition and its frequencies
    Subintervals(SubintervalsArgs),

    /// Evaluate a single interval operation
    Calc(CalcArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Tolerance overrides shared by several commands.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ToleranceArgs {
    /// Relative tolerance for comparisons
    #[arg(long)]
    pub rel_tol: Option<f64>,

    /// Absolute tolerance for comparisons
    #[arg(long)]
    pub abs_tol: Option<f64>,
}

impl ToleranceArgs {
    /// Combine command-line overrides with configured values.
    pub fn resolve(&self, settings: &ToleranceSettings) -> Result<Tolerance> {
        Ok(Tolerance::new(
            self.rel_tol.unwrap_or(settings.relative),
            self.abs_tol.unwrap_or(settings.absolute),
        )?)
    }
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Interval file, one 'mid rad' pair per line
    pub file: PathBuf,

    /// Chart output path
    #[arg(long)]
    pub chart: Option<PathBuf>,

    /// Skip writing the chart
    #[arg(long, conflicts_with = "chart")]
    pub no_chart: bool,

    #[command(flatten)]
    pub tolerance: ToleranceArgs,
}

/// Arguments for the subintervals command.
#[derive(Debug, Parser)]
pub struct SubintervalsArgs {
    /// Interval file, one 'mid rad' pair per line
    pub file: PathBuf,

    #[command(flatten)]
    pub tolerance: ToleranceArgs,
}

/// Arguments for the calc command.
#[derive(Debug, Parser)]
pub struct CalcArgs {
    /// Left operand: 'x', 'mid rad' or 'mid±rad'
    #[arg(allow_hyphen_values = true)]
    pub lhs: String,

    /// Operator: + - * / == in dist
    #[arg(allow_hyphen_values = true)]
    pub op: String,

    /// Right operand: 'x', 'mid rad' or 'mid±rad'
    #[arg(allow_hyphen_values = true)]
    pub rhs: String,

    #[command(flatten)]
    pub tolerance: ToleranceArgs,
}

/// Arguments for the config command.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration file path
    Path,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
