// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{default_config_path, default_version_path};

/// Command-line arguments for `punch-config`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "punch-config",
    version,
    about = "Validate a punch configuration file and its version file.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the configuration file (TOML).
    #[arg(long, value_name = "PATH", default_value_os_t = default_config_path())]
    pub config: PathBuf,

    /// Path to the file holding the current version values (TOML).
    #[arg(long, value_name = "PATH", default_value_os_t = default_version_path())]
    pub version_file: PathBuf,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PUNCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print both definitions back as canonical TOML instead of a summary.
    #[arg(long)]
    pub dump: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
