//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
///
/// `path` is the `--config` override, if any.
pub fn execute_config(
    args: ConfigArgs,
    path: Option<&Path>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => show_config(config, formatter),
        ConfigAction::Init { force } => init_config(path, force, formatter),
        ConfigAction::Path => {
            println!("{}", Config::resolve_path(path)?.display());
            Ok(())
        }
    }
}

/// Print the effective configuration.
fn show_config(config: &Config, formatter: &Formatter) -> Result<()> {
    let rendered = match formatter.format() {
        OutputFormat::Json => serde_json::to_string_pretty(config)?,
        OutputFormat::Table | OutputFormat::Quiet => config.to_toml()?,
    };
    println!("{}", rendered.trim_end());
    Ok(())
}

/// Write the default configuration file.
fn init_config(path: Option<&Path>, force: bool, formatter: &Formatter) -> Result<()> {
    let resolved = Config::resolve_path(path)?;
    if resolved.exists() && !force {
        return Err(CliError::Config(format!(
            "'{}' already exists; use --force to overwrite",
            resolved.display()
        )));
    }

    Config::default().save(&resolved)?;
    println!(
        "{}",
        formatter.success(&format!("Wrote default configuration to {}", resolved.display()))
    );
    Ok(())
}
