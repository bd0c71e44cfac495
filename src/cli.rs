// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::DEFAULT_CONFIG_FILE;

/// Command-line arguments for `jobflow`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "jobflow",
    version,
    about = "Generate Azkaban job and property files from declarative workflows.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Jobflow.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    pub config: String,

    /// Directory the generated files are written to.
    ///
    /// Overrides `[config].build_dir`.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Only emit the named workflow(s). May be given more than once.
    #[arg(long = "workflow", value_name = "NAME")]
    pub workflows: Vec<String>,

    /// Delete previously generated `.job` / `.properties` files first.
    #[arg(long)]
    pub clean: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `JOBFLOW_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + check, print each workflow's job order, but write nothing.
    #[arg(long)]
    pub dry_run: bool,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workflow_flag_is_repeatable() {
        let args = CliArgs::parse_from([
            "jobflow",
            "--workflow",
            "daily",
            "--workflow",
            "hourly",
            "--dry-run",
        ]);
        assert_eq!(args.workflows, vec!["daily", "hourly"]);
        assert!(args.dry_run);
        assert_eq!(args.config, "Jobflow.toml");
        assert!(args.output_dir.is_none());
    }
}
