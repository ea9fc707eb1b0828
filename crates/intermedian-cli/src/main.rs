//! Intermedian CLI - Median estimates for interval-valued measurements.

use clap::Parser;
use intermedian_cli::cli::{ConfigAction, ConfigArgs};
use intermedian_cli::commands;
use intermedian_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over the `-v` count.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> intermedian_cli::Result<()> {
    let config_path = cli.config.as_deref();
    // `config init` must work even when the existing file is missing or broken
    let config = match &cli.command {
        Command::Config(ConfigArgs {
            action: ConfigAction::Init { .. },
        }) => Config::default(),
        _ => Config::load(config_path)?,
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Analyze(args) => commands::execute_analyze(args, &config, &formatter)?,
        Command::Subintervals(args) => commands::execute_subintervals(args, &config, &formatter)?,
        Command::Calc(args) => commands::execute_calc(args, &config, &formatter)?,
        Command::Config(args) => commands::execute_config(args, config_path, &config, &formatter)?,
    }

    Ok(())
}
