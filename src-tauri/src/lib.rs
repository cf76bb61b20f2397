//! Scribe Editor - Tauri Application
//!
//! The trusted host process. It owns the content store, the outbound
//! network client, and the filesystem; the isolated webview UI reaches
//! them only through the fixed command catalog registered below.

mod commands;
mod state;

use state::AppState;
use tauri::{Manager, RunEvent};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging
    scribe_core::init_logging();

    let app = tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            // Open the workbench (database included) before any command
            // can fire, and hand it to Tauri as managed state.
            let state = AppState::new()?;
            app.manage(state);

            tauri::WebviewWindowBuilder::new(
                app,
                "main",
                tauri::WebviewUrl::App("index.html".into()),
            )
            .title("Scribe")
            .inner_size(800.0, 600.0)
            .center()
            .build()?;

            tracing::info!("Scribe started");

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Auth commands
            commands::auth::login,
            // News commands
            commands::news::search_articles,
            commands::news::fetch_image,
            // Export commands
            commands::export::save_document,
            // Snapshot commands
            commands::snapshots::save_snapshot,
            commands::snapshots::list_snapshots,
        ])
        .build(tauri::generate_context!())
        .expect("error while building Scribe");

    app.run(|handle, event| {
        // Close explicitly so the database handle's lifetime matches
        // the process, not a leaked global.
        if let RunEvent::Exit = event {
            handle.state::<AppState>().close();
        }
    });
}
