//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use intermedian_domain::tolerance::{DEFAULT_ABSOLUTE, DEFAULT_RELATIVE};
use intermedian_domain::Tolerance;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Comparison tolerance
    #[serde(default)]
    pub tolerance: ToleranceSettings,

    /// Chart output
    #[serde(default)]
    pub chart: ChartSettings,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Tolerance used for interval equality, containment and breakpoint merging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToleranceSettings {
    /// Relative tolerance
    #[serde(default = "default_relative")]
    pub relative: f64,

    /// Absolute tolerance
    #[serde(default = "default_absolute")]
    pub absolute: f64,
}

/// Chart settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSettings {
    /// Write a chart after `analyze`
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Chart file path
    #[serde(default = "default_chart_output")]
    pub output: PathBuf,

    /// Chart title
    #[serde(default = "default_chart_title")]
    pub title: String,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".intermedian").join("config.toml"))
    }

    /// Resolve an explicit path or fall back to the default one.
    pub fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
        match path {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Load configuration.
    ///
    /// An explicit path must exist; a missing default file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let resolved = Self::resolve_path(path)?;

        if resolved.exists() {
            let contents = fs::read_to_string(&resolved)?;
            Self::from_toml(&contents)
        } else if path.is_some() {
            Err(CliError::Config(format!(
                "Config file '{}' does not exist",
                resolved.display()
            )))
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.tolerance.to_tolerance()?;
        Ok(config)
    }

    /// Render configuration as TOML text.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }
}

impl ToleranceSettings {
    /// Validate and convert into a domain tolerance.
    pub fn to_tolerance(&self) -> Result<Tolerance> {
        Ok(Tolerance::new(self.relative, self.absolute)?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

impl Default for ToleranceSettings {
    fn default() -> Self {
        Self {
            relative: DEFAULT_RELATIVE,
            absolute: DEFAULT_ABSOLUTE,
        }
    }
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            output: default_chart_output(),
            title: default_chart_title(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_relative() -> f64 {
    DEFAULT_RELATIVE
}

fn default_absolute() -> f64 {
    DEFAULT_ABSOLUTE
}

fn default_chart_output() -> PathBuf {
    PathBuf::from("intervals.html")
}

fn default_chart_title() -> String {
    "Interval medians".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert_eq!(config.tolerance.relative, 1e-9);
        assert_eq!(config.chart.output, PathBuf::from("intervals.html"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = Config::from_toml(
            r#"
            [tolerance]
            absolute = 1e-12

            [settings]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.tolerance.absolute, 1e-12);
        assert_eq!(config.tolerance.relative, 1e-9);
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert!(config.settings.color);
        assert!(config.chart.enabled);
    }

    #[test]
    fn test_invalid_tolerance_rejected() {
        let result = Config::from_toml("[tolerance]\nrelative = -1.0\n");
        assert!(matches!(result, Err(CliError::Domain(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.chart.title = "Resistor batch".to_string();
        let text = config.to_toml().unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.settings.color = false;
        config.save(&path).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert!(!loaded.settings.color);
    }

    #[test]
    fn test_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
