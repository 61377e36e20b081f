//! Keep note -> Bear Markdown text.
//!
//! Output layout, sections separated by one blank line and empty sections
//! omitted:
//!
//! ```text
//! # Title
//! body text, or one `- item` / `+ item` line per checklist entry
//!
//! [link title](url)
//! > link description
//!
//! [assets/photo.jpg]
//!
//! #label #multi word# #RED
//! ```

use crate::model::{Annotation, AnnotationSource, KeepNote, ListItem, NoteBody};
use crate::util::bear_tag;

/// Heading used when a note has neither a title nor any content.
pub const PLACEHOLDER_TITLE: &str = "Untitled note";

/// Directory inside a bundle that holds attachments.
pub const ASSET_DIR: &str = "assets";

const UNCHECKED_MARK: &str = "-";
const CHECKED_MARK: &str = "+";

/// Rendering switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Do not turn non-default Keep colours into tags.
    pub ignore_colors: bool,
}

/// Result of rendering one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedNote {
    /// Title as Bear will show it (record title, derived, or placeholder).
    pub title: String,
    /// Full document text, newline terminated.
    pub text: String,
    /// Inline tags in output order, already deduplicated.
    pub tags: Vec<String>,
    /// Non-fatal problems found while rendering.
    pub warnings: Vec<String>,
}

/// Render a note into Bear Markdown.
///
/// `assets` are the file names (not paths) of attachments that will be
/// copied into the bundle; each becomes an `[assets/<name>]` embed.
#[must_use]
pub fn render_note(note: &KeepNote, assets: &[String], options: &RenderOptions) -> RenderedNote {
    let mut warnings = Vec::new();
    let mut sections: Vec<String> = Vec::new();

    let (title, head) = render_head(note);
    sections.push(head);

    let links = render_annotations(&note.annotations, &mut warnings);
    if !links.is_empty() {
        sections.push(links);
    }

    if !assets.is_empty() {
        sections.push(
            assets
                .iter()
                .map(|name| format!("[{ASSET_DIR}/{name}]"))
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }

    let tags = collect_tags(note, options);
    if !tags.is_empty() {
        sections.push(tags.join(" "));
    }

    let mut text = sections.join("\n\n");
    text.push('\n');

    RenderedNote {
        title,
        text,
        tags,
        warnings,
    }
}

/// Title line plus body. Returns the effective title and the section text.
fn render_head(note: &KeepNote) -> (String, String) {
    let title = note.title.trim();
    let body = note.body();

    if !title.is_empty() {
        let heading = format!("# {title}");
        let content = render_body(body);
        let head = if content.is_empty() {
            heading
        } else {
            format!("{heading}\n{content}")
        };
        return (title.to_string(), head);
    }

    match body {
        NoteBody::Text(text) => match first_line(text) {
            // The first text line already is the title Bear will show.
            Some(line) if text.lines().next().is_some_and(|first| first.trim() == line) => {
                (line.to_string(), text.to_string())
            }
            // Leading blank lines: give the document an explicit heading.
            Some(line) => (line.to_string(), format!("# {line}\n{text}")),
            None => (
                PLACEHOLDER_TITLE.to_string(),
                format!("# {PLACEHOLDER_TITLE}"),
            ),
        },
        NoteBody::Checklist(items) => {
            let derived = items
                .iter()
                .find_map(|item| first_line(&item.text))
                .unwrap_or(PLACEHOLDER_TITLE)
                .to_string();
            let head = format!("# {derived}\n{}", render_checklist(items));
            (derived, head)
        }
    }
}

fn render_body(body: NoteBody<'_>) -> String {
    match body {
        NoteBody::Text(text) => text.to_string(),
        NoteBody::Checklist(items) => render_checklist(items),
    }
}

/// One line per item, order and checked state preserved.
#[must_use]
pub fn render_checklist(items: &[ListItem]) -> String {
    items
        .iter()
        .map(|item| {
            let mark = if item.is_checked {
                CHECKED_MARK
            } else {
                UNCHECKED_MARK
            };
            // Multi-line items would break the list; fold them.
            let text = item.text.replace(['\r', '\n'], " ");
            format!("{mark} {text}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_annotations(annotations: &[Annotation], warnings: &mut Vec<String>) -> String {
    let mut blocks = Vec::new();
    for annotation in annotations {
        match &annotation.source {
            AnnotationSource::Weblink => blocks.push(render_weblink(annotation)),
            AnnotationSource::Other(source) => {
                warnings.push(format!("skipped unsupported annotation type '{source}'"));
            }
        }
    }
    blocks.join("\n")
}

fn render_weblink(annotation: &Annotation) -> String {
    let label = if annotation.title.trim().is_empty() {
        annotation.url.as_str()
    } else {
        annotation.title.trim()
    };
    let link = format!("[{label}]({})", annotation.url);
    let description = annotation.description.trim();
    if description.is_empty() {
        link
    } else {
        format!("{link}\n> {description}")
    }
}

/// Labels then colour, as Bear tags, first occurrence wins.
fn collect_tags(note: &KeepNote, options: &RenderOptions) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    let color = (!options.ignore_colors && !note.color.is_default()).then(|| note.color.as_str());

    for tag in note.label_names().chain(color).filter_map(bear_tag) {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

fn first_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).find(|line| !line.is_empty())
}
