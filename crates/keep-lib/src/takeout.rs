//! Google Takeout discovery and note loading.
//!
//! Takeout places every Keep note as `Keep/<name>.json`, with attachments
//! and an `.html` rendition of each note in the same directory.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::error::{KeepError, Result};
use crate::model::KeepNote;
use crate::util::stable_identifier;

/// Name of the Keep folder inside a Takeout archive.
pub const KEEP_DIR: &str = "Keep";

const NOTE_EXTENSION: &str = "json";

/// A parsed note plus what we know about its source file.
#[derive(Debug, Clone)]
pub struct SourceNote {
    pub path: PathBuf,
    pub note: KeepNote,
    /// Source file modification time, used when the record has no creation time.
    pub modified: Option<DateTime<Utc>>,
    /// Deterministic identifier derived from file name and content.
    pub identifier: String,
}

impl SourceNote {
    /// File stem of the source record, used as a last-resort bundle name.
    #[must_use]
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map_or_else(|| "note".to_string(), |s| s.to_string_lossy().into_owned())
    }
}

/// Resolve the directory holding the note files.
///
/// Accepts either the Takeout root (containing `Keep/`) or the Keep
/// directory itself.
///
/// # Errors
///
/// Returns `InputNotFound` if `input` is not a directory, or
/// `KeepDirMissing` if neither location contains note files.
pub fn locate_keep_dir(input: &Path) -> Result<PathBuf> {
    if !input.is_dir() {
        return Err(KeepError::InputNotFound(input.to_path_buf()));
    }

    let nested = input.join(KEEP_DIR);
    if nested.is_dir() {
        return Ok(nested);
    }

    if has_note_files(input)? {
        return Ok(input.to_path_buf());
    }

    Err(KeepError::KeepDirMissing(input.to_path_buf()))
}

/// List note records in `keep_dir`, sorted by path.
///
/// # Errors
///
/// Returns `Io` if the directory cannot be read.
pub fn discover_notes(keep_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut notes = Vec::new();
    for entry in fs::read_dir(keep_dir)? {
        let path = entry?.path();
        if path.is_file() && is_note_file(&path) {
            notes.push(path);
        }
    }
    notes.sort();
    tracing::debug!("Found {} note file(s) in {}", notes.len(), keep_dir.display());
    Ok(notes)
}

/// Read and parse a single note record.
///
/// # Errors
///
/// Returns `NoteParse` if the file cannot be read or is not a Keep note.
pub fn load_note(path: &Path) -> Result<SourceNote> {
    let bytes = fs::read(path).map_err(|e| KeepError::note_parse(path, e.to_string()))?;
    let note: KeepNote =
        serde_json::from_slice(&bytes).map_err(|e| KeepError::note_parse(path, e.to_string()))?;

    let modified = fs::metadata(path)
        .and_then(|meta| meta.modified())
        .ok()
        .map(DateTime::<Utc>::from);

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let identifier = stable_identifier(&[file_name.as_bytes(), &bytes]);

    Ok(SourceNote {
        path: path.to_path_buf(),
        note,
        modified,
        identifier,
    })
}

fn is_note_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(NOTE_EXTENSION))
}

fn has_note_files(dir: &Path) -> Result<bool> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_note_file(&path) {
            return Ok(true);
        }
    }
    Ok(false)
}
