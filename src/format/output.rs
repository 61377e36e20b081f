use keep_lib::{ConversionReport, ConvertedNote, FailedNote, SkippedNote};
use serde::Serialize;
use std::path::PathBuf;

/// Aggregate counts for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunCounts {
    pub found: usize,
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
    pub attachments: usize,
    pub warnings: usize,
}

impl RunCounts {
    #[must_use]
    pub fn from_report(report: &ConversionReport) -> Self {
        Self {
            found: report.total(),
            converted: report.converted.len(),
            skipped: report.skipped.len(),
            failed: report.failed.len(),
            attachments: report.attachment_count(),
            warnings: report.warning_count(),
        }
    }
}

/// Summary of one conversion run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(flatten)]
    pub counts: RunCounts,
    pub converted_notes: Vec<ConvertedNote>,
    pub skipped_notes: Vec<SkippedNote>,
    pub failed_notes: Vec<FailedNote>,
}

impl RunSummary {
    #[must_use]
    pub fn new(input: PathBuf, output: PathBuf, report: ConversionReport) -> Self {
        Self {
            input,
            output,
            counts: RunCounts::from_report(&report),
            converted_notes: report.converted,
            skipped_notes: report.skipped,
            failed_notes: report.failed,
        }
    }
}
