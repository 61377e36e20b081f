//! Convert command implementation.
//!
//! Drives the library converter note by note so progress can be shown, then
//! prints the run summary as text or JSON.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use keep_lib::{ConversionReport, Converter, RenderOptions};
use tracing::info;

use crate::config::ConvertConfig;
use crate::format::{RunSummary, format_summary};

/// Presentation switches for one run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    pub json: bool,
    pub verbose: bool,
    pub progress: bool,
}

/// Execute the conversion.
///
/// # Errors
///
/// Returns an error if the input root is missing, the output root cannot be
/// created, or the Keep directory cannot be listed. Per-note problems are
/// reported in the summary instead.
pub fn execute(config: &ConvertConfig, options: &ConvertOptions) -> Result<RunSummary> {
    let output_dir = config.output_dir(Local::now());
    let converter = Converter::new(
        &config.input,
        &output_dir,
        RenderOptions {
            ignore_colors: config.ignore_colors,
        },
    )?;

    let keep_dir = display_path(converter.keep_dir());
    let output_dir = display_path(converter.out_dir());
    info!("Reading notes from {}", keep_dir.display());
    info!("Saving output to {}", output_dir.display());

    let files = converter.discover()?;
    info!("Found {} Google Keep note(s)", files.len());

    let progress = progress_bar(files.len(), options.progress);
    let mut report = ConversionReport::default();
    for path in &files {
        if let Some(name) = path.file_name() {
            progress.set_message(name.to_string_lossy().into_owned());
        }
        report.record(converter.convert_file(path));
        progress.inc(1);
    }
    progress.finish_and_clear();

    let summary = RunSummary::new(keep_dir, output_dir, report);
    if options.json {
        let json = serde_json::to_string_pretty(&summary)
            .context("failed to serialize run summary")?;
        println!("{json}");
    } else {
        println!("{}", format_summary(&summary, options.verbose));
    }

    Ok(summary)
}

fn progress_bar(len: usize, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len as u64);
    if let Ok(style) =
        ProgressStyle::with_template("{bar:30.cyan/blue} {pos}/{len} {wide_msg}")
    {
        bar.set_style(style.progress_chars("=> "));
    }
    bar
}

/// Canonical path for reporting; falls back to the path as given.
fn display_path(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config(input: &Path, output: &Path) -> ConvertConfig {
        ConvertConfig {
            input: input.to_path_buf(),
            output_root: output.to_path_buf(),
            ignore_colors: false,
            timestamped: false,
            log_file: None,
        }
    }

    #[test]
    fn test_execute_counts() {
        let takeout = tempfile::tempdir().unwrap();
        let keep = takeout.path().join("Keep");
        fs::create_dir(&keep).unwrap();
        fs::write(keep.join("a.json"), r#"{"title": "A", "color": "BLUE"}"#).unwrap();
        fs::write(keep.join("b.json"), "not json").unwrap();
        let out = tempfile::tempdir().unwrap();

        let summary = execute(
            &config(takeout.path(), out.path()),
            &ConvertOptions::default(),
        )
        .unwrap();
        assert_eq!(summary.counts.found, 2);
        assert_eq!(summary.counts.converted, 1);
        assert_eq!(summary.counts.skipped, 1);
        assert_eq!(
            fs::read_to_string(out.path().join("A.textbundle").join("text.txt")).unwrap(),
            "# A\n\n#BLUE\n"
        );
    }

    #[test]
    fn test_execute_ignore_colors() {
        let takeout = tempfile::tempdir().unwrap();
        fs::write(takeout.path().join("a.json"), r#"{"title": "A", "color": "BLUE"}"#).unwrap();
        let out = tempfile::tempdir().unwrap();
        let mut config = config(takeout.path(), out.path());
        config.ignore_colors = true;

        execute(&config, &ConvertOptions::default()).unwrap();
        assert_eq!(
            fs::read_to_string(out.path().join("A.textbundle").join("text.txt")).unwrap(),
            "# A\n"
        );
    }

    #[test]
    fn test_execute_timestamped_creates_run_dir() {
        let takeout = tempfile::tempdir().unwrap();
        fs::write(takeout.path().join("a.json"), r#"{"title": "A"}"#).unwrap();
        let out = tempfile::tempdir().unwrap();
        let mut config = config(takeout.path(), out.path());
        config.timestamped = true;

        let summary = execute(&config, &ConvertOptions::default()).unwrap();
        let run_dir = summary.output.file_name().unwrap().to_string_lossy().into_owned();
        assert!(run_dir.starts_with("keep2bear_"));
        assert!(summary.output.join("A.textbundle").is_dir());
    }

    #[test]
    fn test_execute_missing_input() {
        let out = tempfile::tempdir().unwrap();
        let result = execute(
            &config(Path::new("/nonexistent/takeout"), out.path()),
            &ConvertOptions::default(),
        );
        assert!(result.is_err());
    }
}
