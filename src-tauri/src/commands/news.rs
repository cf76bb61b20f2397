//! News search and image fetch commands
use scribe_core::Article;
use serde::Serialize;
use tauri::State;

use crate::state::AppState;

/// One discriminated shape for the whole search family.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SearchOutcome {
    Ok { articles: Vec<Article> },
    Error { message: String },
}

#[tauri::command]
pub async fn search_articles(
    state: State<'_, AppState>,
    query: String,
    category_hint: String,
) -> Result<SearchOutcome, String> {
    if query.trim().is_empty() {
        return Ok(SearchOutcome::Error {
            message: "Search query must not be empty".to_string(),
        });
    }

    // Clone the client out so the network wait holds no state lock.
    let client = match state.with_workbench(|workbench| Ok(workbench.news().clone())) {
        Ok(c) => c,
        Err(e) => {
            return Ok(SearchOutcome::Error {
                message: e.to_string(),
            })
        }
    };

    match client.search(&query, &category_hint).await {
        Ok(articles) => Ok(SearchOutcome::Ok { articles }),
        Err(e) => Ok(SearchOutcome::Error {
            message: e.to_string(),
        }),
    }
}

/// Returns a data URI, or `null` when the image cannot be fetched so
/// the UI can fall back to a placeholder.
#[tauri::command]
pub async fn fetch_image(
    state: State<'_, AppState>,
    url: String,
) -> Result<Option<String>, String> {
    let client = match state.with_workbench(|workbench| Ok(workbench.news().clone())) {
        Ok(c) => c,
        Err(_) => return Ok(None),
    };

    Ok(client.fetch_image(&url).await)
}
