//! Export execution: pick a location, write the document

use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::document::{extension_for, sanitize_title, Document};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Terminal outcome of one export. Cancel is a first-class outcome,
/// not an error.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SaveOutcome {
    Ok { path: String },
    Canceled,
    Error { message: String },
}

/// Interactive save-location chooser.
///
/// The pipeline only ever sees this trait; the application shell
/// injects the real dialog, tests inject stubs.
pub trait SavePicker: Send + Sync {
    /// Present a chooser seeded with `suggested` and a filter for
    /// `extension`. `None` means the user canceled.
    fn pick_save_path(&self, suggested: &Path, filter_name: &str, extension: &str)
        -> Option<PathBuf>;
}

#[derive(Clone)]
pub struct Exporter {
    /// Default directory offered to the chooser; created on demand.
    export_dir: PathBuf,
}

impl Exporter {
    pub fn new(export_dir: PathBuf) -> Self {
        Self { export_dir }
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Run the pipeline to one of its three terminal outcomes. The
    /// content is written verbatim; a single interactive save makes no
    /// atomic-rename or crash-safety claim.
    pub fn export(&self, document: &Document, picker: &dyn SavePicker) -> SaveOutcome {
        if let Err(e) = validate(document) {
            return SaveOutcome::Error {
                message: e.to_string(),
            };
        }

        match self.run(document, picker) {
            Ok(Some(path)) => SaveOutcome::Ok {
                path: path.to_string_lossy().to_string(),
            },
            Ok(None) => SaveOutcome::Canceled,
            Err(e) => SaveOutcome::Error {
                message: e.to_string(),
            },
        }
    }

    fn run(&self, document: &Document, picker: &dyn SavePicker) -> crate::Result<Option<PathBuf>> {
        let extension = extension_for(&document.doc_type);
        let file_name = format!("{}.{extension}", sanitize_title(&document.title));

        std::fs::create_dir_all(&self.export_dir)?;

        let suggested = self.export_dir.join(file_name);
        let filter_name = filter_label(&document.doc_type);

        let Some(path) = picker.pick_save_path(&suggested, &filter_name, extension) else {
            tracing::debug!(title = %document.title, "Export canceled by user");
            return Ok(None);
        };

        std::fs::write(&path, document.content.as_bytes())?;
        tracing::info!(path = %path.display(), "Document exported");
        Ok(Some(path))
    }
}

fn validate(document: &Document) -> crate::Result<()> {
    // Content presence is enforced by the type; an empty document is a
    // legal export.
    if document.title.trim().is_empty() {
        return Err(ExportError::InvalidDocument(
            "title must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn filter_label(doc_type: &str) -> String {
    let mut chars = doc_type.chars();
    match chars.next() {
        Some(first) => format!("{}{} Files", first.to_uppercase(), chars.as_str()),
        None => "Text Files".to_string(),
    }
}
