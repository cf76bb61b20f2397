//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] scribe_storage::StorageError),

    #[error("News error: {0}")]
    News(#[from] scribe_news::NewsError),

    #[error("Export error: {0}")]
    Export(#[from] scribe_export::ExportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Workbench not initialized")]
    NotInitialized,
}
