//! Bear TextBundle `info.json`.

use serde::{Deserialize, Serialize};

use crate::takeout::SourceNote;
use crate::util::format_local;

pub const BEAR_CREATOR: &str = "net.shinyfrog.bear";
pub const EDITING_DEVICE: &str = "keep2bear";
const TEXTBUNDLE_VERSION: u32 = 2;
const PLAIN_TEXT_UTI: &str = "public.plain-text";

/// Bear-specific block of `info.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BearMetadata {
    pub pinned: u8,
    pub trashed_date: Option<String>,
    pub archived: u8,
    pub modification_date: String,
    pub creation_date: String,
    pub pinned_date: Option<String>,
    pub trashed: u8,
    pub unique_identifier: String,
    pub archived_date: Option<String>,
    pub last_editing_device: String,
}

/// Top-level `info.json` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleInfo {
    #[serde(rename = "net.shinyfrog.bear")]
    pub bear: BearMetadata,
    pub transient: bool,
    #[serde(rename = "type")]
    pub content_type: String,
    pub creator_identifier: String,
    pub version: u32,
}

impl BundleInfo {
    /// Build metadata for a loaded note.
    ///
    /// Creation time prefers the record's own timestamp, then the source
    /// file's mtime. Modification time falls back to the creation time.
    #[must_use]
    pub fn for_note(source: &SourceNote) -> Self {
        let note = &source.note;
        let created = note
            .created_at()
            .or(source.modified)
            .or_else(|| note.edited_at())
            .unwrap_or_default();
        let modified = note.edited_at().unwrap_or(created);

        let created = format_local(created);
        let modified = format_local(modified);
        let stamp_if = |flag: bool| flag.then(|| modified.clone());

        Self {
            bear: BearMetadata {
                pinned: u8::from(note.is_pinned),
                trashed_date: stamp_if(note.is_trashed),
                archived: u8::from(note.is_archived),
                modification_date: modified.clone(),
                creation_date: created,
                pinned_date: stamp_if(note.is_pinned),
                trashed: u8::from(note.is_trashed),
                unique_identifier: source.identifier.clone(),
                archived_date: stamp_if(note.is_archived),
                last_editing_device: EDITING_DEVICE.to_string(),
            },
            transient: true,
            content_type: PLAIN_TEXT_UTI.to_string(),
            creator_identifier: BEAR_CREATOR.to_string(),
            version: TEXTBUNDLE_VERSION,
        }
    }
}
