//! Core data types for keep-lib.
//!
//! Mirrors the per-note JSON written by Google Takeout into `Keep/*.json`.
//! Every field is optional on the wire; missing fields take their defaults
//! and unknown fields are ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Note background colour as named by Keep.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Color {
    #[default]
    Default,
    Red,
    Orange,
    Yellow,
    Green,
    Teal,
    Blue,
    Cerulean,
    Purple,
    Pink,
    Brown,
    Gray,
    #[serde(untagged)]
    Custom(String),
}

impl Color {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Default => "DEFAULT",
            Self::Red => "RED",
            Self::Orange => "ORANGE",
            Self::Yellow => "YELLOW",
            Self::Green => "GREEN",
            Self::Teal => "TEAL",
            Self::Blue => "BLUE",
            Self::Cerulean => "CERULEAN",
            Self::Purple => "PURPLE",
            Self::Pink => "PINK",
            Self::Brown => "BROWN",
            Self::Gray => "GRAY",
            Self::Custom(value) => value,
        }
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        match self {
            Self::Default => true,
            Self::Custom(value) => value.is_empty() || value.eq_ignore_ascii_case("default"),
            _ => false,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One checklist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ListItem {
    pub text: String,
    pub is_checked: bool,
}

/// A Keep label. Takeout writes `{"name": "..."}` objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Label {
    pub name: String,
}

/// Reference to a file stored next to the note JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Attachment {
    pub file_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mimetype: Option<String>,
}

/// Where an annotation came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnnotationSource {
    #[default]
    Weblink,
    #[serde(untagged)]
    Other(String),
}

impl AnnotationSource {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Weblink => "WEBLINK",
            Self::Other(value) => value,
        }
    }
}

/// Link preview attached to a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Annotation {
    pub source: AnnotationSource,
    pub title: String,
    pub url: String,
    pub description: String,
}

/// A single exported Keep note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct KeepNote {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_content: Option<Vec<ListItem>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
    pub color: Color,
    pub is_pinned: bool,
    pub is_archived: bool,
    pub is_trashed: bool,
    #[serde(
        deserialize_with = "deserialize_usec",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_timestamp_usec: Option<i64>,
    #[serde(
        deserialize_with = "deserialize_usec",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_edited_timestamp_usec: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

/// Borrowed view of a note's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteBody<'a> {
    Text(&'a str),
    Checklist(&'a [ListItem]),
}

impl KeepNote {
    /// The note's content. A non-empty `listContent` wins over `textContent`.
    #[must_use]
    pub fn body(&self) -> NoteBody<'_> {
        match self.list_content.as_deref() {
            Some(items) if !items.is_empty() => NoteBody::Checklist(items),
            _ => NoteBody::Text(self.text_content.as_deref().unwrap_or("")),
        }
    }

    #[must_use]
    pub fn is_checklist(&self) -> bool {
        matches!(self.body(), NoteBody::Checklist(_))
    }

    /// Label names in source order, blanks dropped.
    pub fn label_names(&self) -> impl Iterator<Item = &str> {
        self.labels
            .iter()
            .map(|label| label.name.trim())
            .filter(|name| !name.is_empty())
    }

    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_timestamp_usec.and_then(usec_to_datetime)
    }

    #[must_use]
    pub fn edited_at(&self) -> Option<DateTime<Utc>> {
        self.user_edited_timestamp_usec.and_then(usec_to_datetime)
    }
}

/// Convert microseconds since the Unix epoch into a UTC timestamp.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn usec_to_datetime(usec: i64) -> Option<DateTime<Utc>> {
    let secs = usec.div_euclid(1_000_000);
    let nanos = (usec.rem_euclid(1_000_000) * 1_000) as u32;
    DateTime::from_timestamp(secs, nanos)
}

/// Keep writes timestamps as JSON numbers; some re-exports quote them.
fn deserialize_usec<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }

    #[allow(clippy::cast_possible_truncation)]
    let value = match Option::<Raw>::deserialize(deserializer)? {
        None => None,
        Some(Raw::Int(v)) => Some(v),
        Some(Raw::Float(v)) => Some(v as i64),
        Some(Raw::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                Some(s.parse::<i64>().map_err(serde::de::Error::custom)?)
            }
        }
    };
    Ok(value)
}
