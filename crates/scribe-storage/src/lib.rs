//! Scribe Storage Layer
//!
//! SQLite-based persistence for editor content snapshots.
//! The store is append-only: revisions are new rows, never mutations.

mod database;
mod error;
mod migrations;
mod snapshots;

pub use database::Database;
pub use error::StorageError;
pub use snapshots::{Snapshot, SnapshotStore};

pub type Result<T> = std::result::Result<T, StorageError>;
