//! Naming, hashing and time helpers.

use chrono::{DateTime, Local, SecondsFormat, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};

/// Longest bundle stem we produce, in characters.
pub const MAX_NAME_CHARS: usize = 50;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

// ============================================================================
// File Names
// ============================================================================

/// Reduce a title to a filesystem-safe bundle stem.
///
/// Keeps alphanumerics plus `.`, `_`, `-` and space, trims the result and
/// caps it at [`MAX_NAME_CHARS`]. Leading dots are dropped so the bundle is
/// never hidden. Returns `None` when nothing usable remains.
#[must_use]
pub fn sanitize_name(title: &str) -> Option<String> {
    let kept: String = title
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '.' | '_' | '-' | ' '))
        .take(MAX_NAME_CHARS)
        .collect();
    let trimmed = kept.trim().trim_start_matches('.').trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Strip any directory components from an attachment reference.
#[must_use]
pub fn file_name_of(reference: &str) -> &str {
    reference.rsplit(['/', '\\']).next().unwrap_or(reference)
}

// ============================================================================
// Tags
// ============================================================================

/// Format a label as a Bear inline tag.
///
/// Single words become `#word`; labels with inner whitespace use the closed
/// form `#multi word#`. A literal `#` or `\` in the label is backslash
/// escaped, so `C#` and `C` stay distinct tags. Returns `None` for labels
/// that are blank after normalisation.
#[must_use]
pub fn bear_tag(label: &str) -> Option<String> {
    let normalized = WHITESPACE_RUN.replace_all(label.trim(), " ");
    if normalized.is_empty() {
        return None;
    }
    let mut escaped = String::with_capacity(normalized.len());
    for c in normalized.chars() {
        if matches!(c, '#' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    if normalized.contains(' ') {
        Some(format!("#{escaped}#"))
    } else {
        Some(format!("#{escaped}"))
    }
}

// ============================================================================
// Identifiers
// ============================================================================

/// Deterministic UUID-shaped identifier for a note.
///
/// SHA256 over the parts (null separated), first 16 bytes rendered as an
/// uppercase 8-4-4-4-12 string.
#[must_use]
pub fn stable_identifier(parts: &[&[u8]]) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
        hasher.update(b"\x00");
    }
    let digest = hasher.finalize();
    let hex: String = digest
        .iter()
        .take(16)
        .map(|byte| format!("{byte:02X}"))
        .collect();
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}

// ============================================================================
// Time
// ============================================================================

/// Local-time RFC3339 with whole seconds, e.g. `2020-09-13T14:26:40+02:00`.
#[must_use]
pub fn format_local(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local)
        .to_rfc3339_opts(SecondsFormat::Secs, false)
}
