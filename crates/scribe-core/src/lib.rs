//! Scribe Core
//!
//! Central coordination layer for the Scribe editor host. The host
//! process owns all state; the webview UI is untrusted and reaches the
//! collaborators below only through the fixed command catalog.

mod config;
mod error;
mod workbench;

pub use config::Config;
pub use error::CoreError;
pub use workbench::Workbench;

// Re-export collaborator types
pub use scribe_auth::{Authenticator, LoginOutcome, StubAuthenticator};
pub use scribe_export::{Document, ExportError, Exporter, SaveOutcome, SavePicker};
pub use scribe_news::{Article, NewsClient, NewsError};
pub use scribe_storage::{Database, Snapshot, SnapshotStore, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
