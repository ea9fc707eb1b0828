//! Intermedian CLI library.
//!
//! This library provides the core functionality for the Intermedian command-line interface,
//! including interval file loading, configuration management, command execution,
//! output formatting and chart rendering.

pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
