//! Main host state container
//!
//! One explicitly constructed instance owns the store, the news
//! client, the exporter, and the authenticator; it is handed to the
//! command bridge at startup instead of living behind a global.

use std::sync::Arc;

use scribe_auth::{Authenticator, StubAuthenticator};
use scribe_export::Exporter;
use scribe_news::NewsClient;
use scribe_storage::{Database, SnapshotStore};

use crate::config::Config;
use crate::Result;

pub struct Workbench {
    config: Config,
    /// Content store; serializes its own writes through the connection.
    snapshots: SnapshotStore,
    news: NewsClient,
    exporter: Exporter,
    authenticator: Arc<dyn Authenticator>,
}

impl Workbench {
    /// Open the database and wire up the collaborators. The store,
    /// proxy, and exporter never call each other; they only meet here.
    pub fn new(config: Config) -> Result<Self> {
        // Ensure data directory exists
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;
        let snapshots = SnapshotStore::new(db);
        let news = NewsClient::new(config.news_api_key.clone())?;
        let exporter = Exporter::new(config.export_dir.clone());

        tracing::info!(db = %config.database_path.display(), "Workbench opened");

        Ok(Self {
            config,
            snapshots,
            news,
            exporter,
            authenticator: Arc::new(StubAuthenticator::default()),
        })
    }

    /// Swap the authentication capability without touching the bridge.
    pub fn with_authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = authenticator;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn snapshots(&self) -> &SnapshotStore {
        &self.snapshots
    }

    pub fn news(&self) -> &NewsClient {
        &self.news
    }

    pub fn exporter(&self) -> &Exporter {
        &self.exporter
    }

    pub fn authenticator(&self) -> &dyn Authenticator {
        self.authenticator.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_auth::LoginOutcome;

    fn test_config(dir: &std::path::Path) -> Config {
        Config {
            database_path: dir.join("scribe.db"),
            export_dir: dir.join("notes"),
            news_api_key: None,
        }
    }

    #[test]
    fn test_workbench_opens_and_reopens() {
        let dir = tempfile::tempdir().unwrap();

        {
            let workbench = Workbench::new(test_config(dir.path())).unwrap();
            workbench.snapshots().append("draft one").unwrap();
        }

        // Second startup over the same file must be idempotent and see
        // the earlier append.
        let workbench = Workbench::new(test_config(dir.path())).unwrap();
        let all = workbench.snapshots().list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].content, "draft one");
    }

    #[test]
    fn test_workbench_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deep").join("data");
        let workbench = Workbench::new(test_config(&nested));
        assert!(workbench.is_ok());
        assert!(nested.join("scribe.db").exists());
    }

    #[test]
    fn test_authenticator_is_swappable() {
        struct AlwaysDeny;
        impl Authenticator for AlwaysDeny {
            fn login(&self, _: &str, _: &str) -> LoginOutcome {
                LoginOutcome::Denied {
                    error: "locked".to_string(),
                }
            }
        }

        let dir = tempfile::tempdir().unwrap();
        let workbench = Workbench::new(test_config(dir.path()))
            .unwrap()
            .with_authenticator(Arc::new(AlwaysDeny));

        assert!(matches!(
            workbench.authenticator().login("admin", "admin"),
            LoginOutcome::Denied { .. }
        ));
    }
}
