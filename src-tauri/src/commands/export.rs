//! Document export command
use scribe_core::{Document, SaveOutcome, SavePicker};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tauri::{AppHandle, State};
use tauri_plugin_dialog::DialogExt;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DocumentPayload {
    pub title: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub content: String,
}

/// Save chooser backed by the native dialog plugin.
struct DialogPicker {
    app: AppHandle,
}

impl SavePicker for DialogPicker {
    fn pick_save_path(
        &self,
        suggested: &Path,
        filter_name: &str,
        extension: &str,
    ) -> Option<PathBuf> {
        let mut dialog = self
            .app
            .dialog()
            .file()
            .set_title("Save Note")
            .add_filter(filter_name, &[extension])
            .add_filter("All Files", &["*"]);

        if let Some(dir) = suggested.parent() {
            dialog = dialog.set_directory(dir);
        }
        if let Some(name) = suggested.file_name().and_then(|n| n.to_str()) {
            dialog = dialog.set_file_name(name);
        }

        dialog
            .blocking_save_file()
            .and_then(|path| path.into_path().ok())
    }
}

#[tauri::command]
pub async fn save_document(
    app: AppHandle,
    state: State<'_, AppState>,
    document: DocumentPayload,
) -> Result<SaveOutcome, String> {
    let exporter = match state.with_workbench(|workbench| Ok(workbench.exporter().clone())) {
        Ok(e) => e,
        Err(e) => {
            return Ok(SaveOutcome::Error {
                message: e.to_string(),
            })
        }
    };

    let doc = Document {
        title: document.title,
        doc_type: document.doc_type,
        content: document.content,
    };
    let picker = DialogPicker { app: app.clone() };

    // The dialog blocks its thread until the user answers; keep it off
    // the dispatch path so unrelated commands stay responsive.
    let outcome = tauri::async_runtime::spawn_blocking(move || exporter.export(&doc, &picker))
        .await
        .unwrap_or_else(|e| SaveOutcome::Error {
            message: e.to_string(),
        });

    Ok(outcome)
}
