//! Conversion driver: Keep directory in, TextBundles out.
//!
//! Each note goes through load -> render -> write independently. Problems
//! with one note are recorded in the [`ConversionReport`] and never stop the
//! batch; only a missing input root or an unusable output root is fatal.

use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::bundle::{Asset, write_bundle};
use crate::error::{KeepError, Result};
use crate::metadata::BundleInfo;
use crate::model::Attachment;
use crate::render::{RenderOptions, render_note};
use crate::takeout::{SourceNote, discover_notes, load_note, locate_keep_dir};
use crate::util::{file_name_of, sanitize_name};

/// A note that made it into the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertedNote {
    pub source: PathBuf,
    pub bundle: PathBuf,
    pub title: String,
    pub attachments: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// A record that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedNote {
    pub source: PathBuf,
    pub reason: String,
}

/// A parsed record whose bundle could not be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedNote {
    pub source: PathBuf,
    pub reason: String,
}

/// Outcome of converting one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteOutcome {
    Converted(ConvertedNote),
    Skipped(SkippedNote),
    Failed(FailedNote),
}

/// Everything that happened during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub converted: Vec<ConvertedNote>,
    pub skipped: Vec<SkippedNote>,
    pub failed: Vec<FailedNote>,
}

impl ConversionReport {
    pub fn record(&mut self, outcome: NoteOutcome) {
        match outcome {
            NoteOutcome::Converted(note) => self.converted.push(note),
            NoteOutcome::Skipped(note) => self.skipped.push(note),
            NoteOutcome::Failed(note) => self.failed.push(note),
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.converted.len() + self.skipped.len() + self.failed.len()
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.converted.iter().map(|note| note.warnings.len()).sum()
    }

    #[must_use]
    pub fn attachment_count(&self) -> usize {
        self.converted.iter().map(|note| note.attachments).sum()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.failed.is_empty() && self.warning_count() == 0
    }
}

/// Converts one Keep export into one output directory.
#[derive(Debug, Clone)]
pub struct Converter {
    keep_dir: PathBuf,
    out_dir: PathBuf,
    options: RenderOptions,
}

impl Converter {
    /// Resolve the Keep directory and make sure the output root exists.
    ///
    /// # Errors
    ///
    /// Returns `InputNotFound`/`KeepDirMissing` for a bad input root and
    /// `OutputDir` if the output root cannot be created or written to.
    pub fn new(input: &Path, out_dir: &Path, options: RenderOptions) -> Result<Self> {
        let keep_dir = locate_keep_dir(input)?;
        fs::create_dir_all(out_dir).map_err(|source| KeepError::OutputDir {
            path: out_dir.to_path_buf(),
            source,
        })?;
        ensure_writable(out_dir)?;
        Ok(Self {
            keep_dir,
            out_dir: out_dir.to_path_buf(),
            options,
        })
    }

    #[must_use]
    pub fn keep_dir(&self) -> &Path {
        &self.keep_dir
    }

    #[must_use]
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Note records to convert, in processing order.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the Keep directory cannot be listed.
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        discover_notes(&self.keep_dir)
    }

    /// Convert every note, in order.
    ///
    /// # Errors
    ///
    /// Only fails if the Keep directory cannot be listed; per-note problems
    /// are part of the returned report.
    pub fn run(&self) -> Result<ConversionReport> {
        let mut report = ConversionReport::default();
        for path in self.discover()? {
            report.record(self.convert_file(&path));
        }
        Ok(report)
    }

    /// Load, render and write a single note record.
    #[must_use]
    pub fn convert_file(&self, path: &Path) -> NoteOutcome {
        let source = match load_note(path) {
            Ok(source) => source,
            Err(err) => {
                tracing::warn!("Skipping {}: {}", path.display(), err);
                return NoteOutcome::Skipped(SkippedNote {
                    source: path.to_path_buf(),
                    reason: err.to_string(),
                });
            }
        };

        match self.convert_note(&source) {
            Ok(converted) => NoteOutcome::Converted(converted),
            Err(err) => {
                tracing::error!("Failed to convert {}: {}", path.display(), err);
                NoteOutcome::Failed(FailedNote {
                    source: path.to_path_buf(),
                    reason: err.to_string(),
                })
            }
        }
    }

    fn convert_note(&self, source: &SourceNote) -> Result<ConvertedNote> {
        let mut warnings = Vec::new();
        let assets = self.resolve_assets(&source.note.attachments, &mut warnings);
        let asset_names: Vec<String> = assets.iter().map(|asset| asset.name.clone()).collect();

        let rendered = render_note(&source.note, &asset_names, &self.options);
        warnings.extend(rendered.warnings);

        let stem = sanitize_name(&rendered.title)
            .or_else(|| sanitize_name(&source.stem()))
            .unwrap_or_else(|| "note".to_string());
        let info = BundleInfo::for_note(source);
        let bundle = write_bundle(&self.out_dir, &stem, &rendered.text, &info, &assets)?;

        for warning in &warnings {
            tracing::warn!("{}: {}", source.path.display(), warning);
        }

        Ok(ConvertedNote {
            source: source.path.clone(),
            bundle,
            title: rendered.title,
            attachments: assets.len(),
            warnings,
        })
    }

    /// Map attachment references to files that exist under the Keep directory.
    ///
    /// Identical references collapse to one asset. Distinct references that
    /// share a file name get numbered names inside `assets/`.
    fn resolve_assets(&self, attachments: &[Attachment], warnings: &mut Vec<String>) -> Vec<Asset> {
        let mut seen_paths = HashSet::new();
        let mut taken_names = HashSet::new();
        let mut assets = Vec::new();

        for attachment in attachments {
            let reference = attachment.file_path.trim();
            if reference.is_empty() {
                continue;
            }
            if !is_contained(reference) {
                warnings.push(format!(
                    "ignored attachment outside the export: '{reference}'"
                ));
                continue;
            }

            let path = self.keep_dir.join(reference);
            if !seen_paths.insert(path.clone()) {
                continue;
            }
            if !path.is_file() {
                warnings.push(KeepError::AttachmentNotFound(path).to_string());
                continue;
            }

            let name = unique_asset_name(file_name_of(reference), &taken_names);
            taken_names.insert(name.clone());
            assets.push(Asset { source: path, name });
        }
        assets
    }
}

/// `name`, or `stem 2.ext`, `stem 3.ext`, ... if already used in the bundle.
fn unique_asset_name(name: &str, taken: &HashSet<String>) -> String {
    if !taken.contains(name) {
        return name.to_string();
    }
    let (stem, ext) = match name.rfind('.') {
        Some(dot) if dot > 0 => name.split_at(dot),
        _ => (name, ""),
    };
    (2_usize..)
        .map(|n| format!("{stem} {n}{ext}"))
        .find(|candidate| !taken.contains(candidate))
        .unwrap_or_else(|| name.to_string())
}

/// Create and drop a scratch file so an unwritable root fails up front.
fn ensure_writable(out_dir: &Path) -> Result<()> {
    tempfile::Builder::new()
        .prefix(".keep2bear-")
        .tempfile_in(out_dir)
        .map(drop)
        .map_err(|source| KeepError::OutputDir {
            path: out_dir.to_path_buf(),
            source,
        })
}

/// Relative path with no `..` or root components.
fn is_contained(reference: &str) -> bool {
    Path::new(reference)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
