//! Application state management
use parking_lot::RwLock;
use scribe_core::{Config, CoreError, Result, Workbench};
use std::sync::Arc;

/// Thread-safe application state wrapper
pub struct AppState {
    workbench: Arc<RwLock<Option<Workbench>>>,
}

impl AppState {
    pub fn new() -> Result<Self> {
        let config = Config::default();
        let workbench = Workbench::new(config)?;

        Ok(Self {
            workbench: Arc::new(RwLock::new(Some(workbench))),
        })
    }

    pub fn with_workbench<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Workbench) -> Result<T>,
    {
        let guard = self.workbench.read();
        match guard.as_ref() {
            Some(workbench) => f(workbench),
            None => Err(CoreError::NotInitialized),
        }
    }

    /// Drop the workbench, and with it the database handle, at
    /// process shutdown.
    pub fn close(&self) {
        if self.workbench.write().take().is_some() {
            tracing::info!("Workbench closed");
        }
    }
}
