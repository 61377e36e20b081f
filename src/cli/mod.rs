//! Command-line interface for `keep2bear`.
//!
//! This module provides the CLI parsing and dispatch using clap.

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::{CliOverrides, ConvertConfig, FileConfig};
use crate::logging;

/// `keep2bear` - convert a Google Keep export into Bear TextBundles.
#[derive(Parser, Debug)]
#[command(name = "keep2bear")]
#[command(
    author,
    version,
    about = "Convert exported Google Keep notes to Bear",
    long_about = None,
    after_help = "Offline and one-shot: input files are only read, never modified."
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Google Takeout directory (or its Keep/ folder)
    #[arg(short, long, env = "KEEP2BEAR_INPUT", value_name = "PATH")]
    pub input: PathBuf,

    /// Output directory (created if missing)
    #[arg(short, long, alias = "out", env = "KEEP2BEAR_OUTPUT", value_name = "PATH")]
    pub output: PathBuf,

    /// Do not convert Google Keep colors to Bear tags
    #[arg(long, alias = "ignorecolors")]
    pub ignore_colors: bool,

    /// Write into a fresh keep2bear_<timestamp> folder inside the output directory
    #[arg(long)]
    pub timestamped: bool,

    /// YAML config file (default: ./keep2bear.yaml if present)
    #[arg(long, env = "KEEP2BEAR_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Also write logs to this file
    #[arg(long, env = "KEEP2BEAR_LOG_FILE", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    #[must_use]
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            ignore_colors: self.ignore_colors,
            timestamped: self.timestamped,
            log_file: self.log_file.clone(),
        }
    }
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the conversion hits a
/// fatal error.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let file_config = FileConfig::discover(cli.config.as_deref())?;
    let config = ConvertConfig::resolve(
        cli.input.clone(),
        cli.output.clone(),
        &file_config,
        &cli.overrides(),
    );

    logging::init_logging(cli.verbose, cli.quiet, config.log_file.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let options = commands::convert::ConvertOptions {
        json: cli.json,
        verbose: cli.verbose > 0,
        progress: !cli.quiet && !cli.json,
    };
    commands::convert::execute(&config, &options)?;
    Ok(())
}
