//! Error types for `keep-lib`.
//!
//! Fatal errors abort a run; per-note errors are collected into the
//! [`ConversionReport`](crate::convert::ConversionReport) instead.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for keep-lib operations.
#[derive(Error, Debug)]
pub enum KeepError {
    // === Input Errors ===
    /// Input root does not exist or is not a directory.
    #[error("Input directory not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Neither the input root nor its `Keep/` child holds any note files.
    #[error("Could not find a 'Keep' directory in '{}'", .0.display())]
    KeepDirMissing(PathBuf),

    /// A note record failed to parse as a Keep JSON document.
    #[error("Failed to parse note {}: {reason}", .path.display())]
    NoteParse { path: PathBuf, reason: String },

    /// Referenced attachment file is not present in the export.
    #[error("Attachment not found: {}", .0.display())]
    AttachmentNotFound(PathBuf),

    // === Output Errors ===
    /// Output root could not be created or written to.
    #[error("Cannot write to output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a single bundle failed.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KeepError {
    #[must_use]
    pub fn note_parse(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::NoteParse {
            path: path.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Whether this error should stop the whole run.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::InputNotFound(_) | Self::KeepDirMissing(_) | Self::OutputDir { .. }
        )
    }
}

/// Result type using `KeepError`.
pub type Result<T> = std::result::Result<T, KeepError>;
