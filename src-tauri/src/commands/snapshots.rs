//! Content snapshot commands
use serde::{Deserialize, Serialize};
use tauri::State;

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct SnapshotInfo {
    pub id: i64,
    pub content: String,
    pub created_at: String,
}

impl From<scribe_core::Snapshot> for SnapshotInfo {
    fn from(snapshot: scribe_core::Snapshot) -> Self {
        Self {
            id: snapshot.id,
            content: snapshot.content,
            created_at: snapshot.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

#[tauri::command]
pub fn save_snapshot(state: State<AppState>, content: String) -> CommandResult<()> {
    match state.with_workbench(|workbench| Ok(workbench.snapshots().append(&content)?)) {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn list_snapshots(state: State<AppState>) -> CommandResult<Vec<SnapshotInfo>> {
    match state.with_workbench(|workbench| Ok(workbench.snapshots().list_all()?)) {
        Ok(snapshots) => {
            CommandResult::ok(snapshots.into_iter().map(SnapshotInfo::from).collect())
        }
        Err(e) => CommandResult::err(e.to_string()),
    }
}
