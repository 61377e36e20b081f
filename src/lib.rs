//! `keep2bear` - Google Keep to Bear converter
//!
//! This crate provides the command-line front end for the `keep2bear` tool.
//! The conversion itself lives in `keep-lib`.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`cli`] - Command-line interface using clap
//! - [`config`] - Configuration layering (YAML file, env, flags)
//! - [`format`] - Output formatting (text, JSON)
//! - [`logging`] - tracing subscriber setup

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod format;
pub mod logging;

pub use keep_lib::{KeepError, Result};

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the conversion fails
/// fatally.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}
