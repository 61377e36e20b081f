//! TextBundle writer.
//!
//! A bundle is a directory `<name>.textbundle/` holding `text.txt`,
//! `info.json` and an optional `assets/` folder. Bundles are assembled in a
//! hidden sibling directory and renamed into place, so a failure never leaves
//! a half-written bundle behind.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{KeepError, Result};
use crate::metadata::BundleInfo;
use crate::render::ASSET_DIR;

pub const BUNDLE_EXT: &str = "textbundle";
pub const TEXT_FILE: &str = "text.txt";
pub const INFO_FILE: &str = "info.json";

/// An attachment to copy into a bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub source: PathBuf,
    /// File name inside `assets/`.
    pub name: String,
}

/// Pick a free bundle path for `stem` inside `out_dir`.
///
/// `Stem.textbundle`, then `Stem 2.textbundle`, `Stem 3.textbundle`, ...
#[must_use]
pub fn unique_bundle_path(out_dir: &Path, stem: &str) -> PathBuf {
    let first = out_dir.join(format!("{stem}.{BUNDLE_EXT}"));
    if !first.exists() {
        return first;
    }
    let mut n = 2_usize;
    loop {
        let candidate = out_dir.join(format!("{stem} {n}.{BUNDLE_EXT}"));
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}

/// Write a complete bundle and return its final path.
///
/// # Errors
///
/// Returns `Write` naming the bundle if any file cannot be written or an
/// asset cannot be copied. The partial staging directory is removed.
pub fn write_bundle(
    out_dir: &Path,
    stem: &str,
    text: &str,
    info: &BundleInfo,
    assets: &[Asset],
) -> Result<PathBuf> {
    let target = unique_bundle_path(out_dir, stem);
    let staging = staging_path(&target);

    if staging.exists() {
        fs::remove_dir_all(&staging).map_err(|e| KeepError::write(&staging, e))?;
    }

    if let Err(err) = populate(&staging, text, info, assets) {
        remove_staging(&staging);
        return Err(match err {
            KeepError::Io(source) => KeepError::write(&target, source),
            other => other,
        });
    }

    fs::rename(&staging, &target).map_err(|e| KeepError::write(&target, e))?;
    tracing::debug!("Wrote bundle {}", target.display());
    Ok(target)
}

/// Best-effort removal of a partial staging directory.
fn remove_staging(staging: &Path) {
    match fs::remove_dir_all(staging) {
        Ok(()) => {}
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => tracing::warn!(
            "Failed to remove staging directory {}: {}",
            staging.display(),
            err
        ),
    }
}

fn staging_path(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    target.with_file_name(format!(".{name}.tmp"))
}

fn populate(dir: &Path, text: &str, info: &BundleInfo, assets: &[Asset]) -> Result<()> {
    fs::create_dir_all(dir)?;
    fs::write(dir.join(TEXT_FILE), text)?;

    let json = serde_json::to_string_pretty(info)?;
    fs::write(dir.join(INFO_FILE), json)?;

    if !assets.is_empty() {
        let asset_dir = dir.join(ASSET_DIR);
        fs::create_dir(&asset_dir)?;
        for asset in assets {
            fs::copy(&asset.source, asset_dir.join(&asset.name)).map_err(|e| {
                KeepError::write(&asset.source, e)
            })?;
        }
    }
    Ok(())
}
