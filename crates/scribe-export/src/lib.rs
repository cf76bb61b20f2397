//! Scribe Export Pipeline
//!
//! Turns a logical document into a file on disk: validate, map the type
//! tag to an extension, sanitize the title into a safe file stem, let
//! the user pick a location, write the content verbatim.
//!
//! The interactive chooser is behind the [`SavePicker`] trait so the
//! pipeline itself never touches UI code.

mod document;
mod exporter;

pub use document::{extension_for, sanitize_title, Document};
pub use exporter::{ExportError, Exporter, SaveOutcome, SavePicker};

pub type Result<T> = std::result::Result<T, ExportError>;
