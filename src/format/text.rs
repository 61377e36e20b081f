//! Text formatting functions for `keep2bear`.
//!
//! Plain text (non-ANSI) lines for the end-of-run summary.

use std::path::Path;

use keep_lib::{ConvertedNote, FailedNote, SkippedNote};

use super::RunSummary;

/// Status icon characters.
pub mod icons {
    /// Converted note.
    pub const CONVERTED: &str = "✓";
    /// Record skipped because it could not be parsed.
    pub const SKIPPED: &str = "⚠";
    /// Bundle could not be written.
    pub const FAILED: &str = "✗";
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

/// Format: `✓ {title} -> {bundle name}`
#[must_use]
pub fn format_converted_line(note: &ConvertedNote) -> String {
    format!(
        "{} {} -> {}",
        icons::CONVERTED,
        note.title,
        file_name(&note.bundle)
    )
}

/// Format: `⚠ {source name}: {reason}`
#[must_use]
pub fn format_skipped_line(note: &SkippedNote) -> String {
    format!("{} {}: {}", icons::SKIPPED, file_name(&note.source), note.reason)
}

/// Format: `✗ {source name}: {reason}`
#[must_use]
pub fn format_failed_line(note: &FailedNote) -> String {
    format!("{} {}: {}", icons::FAILED, file_name(&note.source), note.reason)
}

/// Multi-line end-of-run summary.
#[must_use]
pub fn format_summary(summary: &RunSummary, verbose: bool) -> String {
    let counts = &summary.counts;
    let mut lines = Vec::new();

    if verbose {
        lines.extend(summary.converted_notes.iter().map(format_converted_line));
    }
    lines.extend(summary.skipped_notes.iter().map(format_skipped_line));
    lines.extend(summary.failed_notes.iter().map(format_failed_line));
    if !lines.is_empty() {
        lines.push(String::new());
    }

    lines.push(format!(
        "Converted {} of {} into {}",
        counts.converted,
        plural(counts.found, "note"),
        summary.output.display()
    ));
    lines.push(format!(
        "{}, {} skipped, {} failed, {}",
        plural(counts.attachments, "attachment"),
        counts.skipped,
        counts.failed,
        plural(counts.warnings, "warning")
    ));
    lines.join("\n")
}
