//! Output formatting for `keep2bear`.
//!
//! Supports both a human-readable text summary and machine-parseable JSON.
//! With `--json`, stdout carries only the JSON document; diagnostics stay on
//! stderr.
//!
//! # JSON Output Types
//!
//! - [`RunSummary`] - counts plus per-note detail for one conversion run

mod output;
mod text;

pub use output::{RunCounts, RunSummary};
pub use text::{format_converted_line, format_failed_line, format_skipped_line, format_summary};
