//! `keep-lib` — Google Keep to Bear conversion library.
//!
//! Reads the per-note JSON records Google Takeout writes into `Keep/` and
//! turns each one into a Bear-importable TextBundle.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use keep_lib::{Converter, RenderOptions};
//!
//! let converter = Converter::new(
//!     Path::new("Takeout"),
//!     Path::new("bear-import"),
//!     RenderOptions::default(),
//! ).unwrap();
//!
//! let report = converter.run().unwrap();
//! println!("{} converted, {} skipped", report.converted.len(), report.skipped.len());
//! ```

pub mod bundle;
pub mod convert;
pub mod error;
pub mod metadata;
pub mod model;
pub mod render;
pub mod takeout;
pub mod util;

pub use convert::{
    ConversionReport, ConvertedNote, Converter, FailedNote, NoteOutcome, SkippedNote,
};
pub use error::{KeepError, Result};
pub use model::{KeepNote, ListItem, NoteBody};
pub use render::{RenderOptions, RenderedNote, render_note};
