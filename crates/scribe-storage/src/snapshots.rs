//! Append-only content snapshot store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Database;
use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Versioning is additive: `append` is the only write, and nothing in
/// this crate updates or deletes an existing row.
pub struct SnapshotStore {
    db: Database,
}

impl SnapshotStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Record a new content snapshot. Fire-and-forget: callers get no
    /// read-after-write guarantee beyond the insert having committed.
    pub fn append(&self, content: &str) -> Result<()> {
        self.db.with_connection(|conn| {
            conn.execute(
                "INSERT INTO snapshots (content, created_at) VALUES (?1, ?2)",
                rusqlite::params![content, Utc::now().to_rfc3339()],
            )?;
            Ok(())
        })?;

        tracing::debug!(bytes = content.len(), "Appended content snapshot");
        Ok(())
    }

    /// All snapshots, most recent first. No pagination; the snapshot
    /// log is expected to stay small.
    pub fn list_all(&self) -> Result<Vec<Snapshot>> {
        self.db.with_connection(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, content, created_at FROM snapshots
                 ORDER BY created_at DESC, id DESC",
            )?;

            let snapshots: Vec<Snapshot> = stmt
                .query_map([], |row| {
                    let created_str: String = row.get(2)?;
                    let created_at = DateTime::parse_from_rfc3339(&created_str)
                        .map(|dt| dt.with_timezone(&Utc))
                        .unwrap_or_else(|_| Utc::now());

                    Ok(Snapshot {
                        id: row.get(0)?,
                        content: row.get(1)?,
                        created_at,
                    })
                })?
                .filter_map(|r| r.ok())
                .collect();

            Ok(snapshots)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_then_list_places_newest_first() {
        let db = Database::open_in_memory().unwrap();
        let store = SnapshotStore::new(db);

        store.append("first draft").unwrap();
        store.append("second draft").unwrap();
        store.append("third draft").unwrap();

        let all = store.list_all().unwrap();
        assert_eq!(all.len(), 3);
        // Same-second appends fall back to the id tiebreak.
        assert_eq!(all[0].content, "third draft");
        assert_eq!(all[1].content, "second draft");
        assert_eq!(all[2].content, "first draft");
    }

    #[test]
    fn test_content_round_trips_exactly() {
        let db = Database::open_in_memory().unwrap();
        let store = SnapshotStore::new(db);

        let content = "fn main() {\n    println!(\"héllo\\n\");\n}\n\t// trailing";
        store.append(content).unwrap();

        let all = store.list_all().unwrap();
        assert_eq!(all[0].content, content);
    }

    #[test]
    fn test_ids_strictly_increase() {
        let db = Database::open_in_memory().unwrap();
        let store = SnapshotStore::new(db);

        for i in 0..5 {
            store.append(&format!("rev {i}")).unwrap();
        }

        let mut ids: Vec<i64> = store.list_all().unwrap().iter().map(|s| s.id).collect();
        ids.reverse();
        for pair in ids.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_empty_store_lists_nothing() {
        let db = Database::open_in_memory().unwrap();
        let store = SnapshotStore::new(db);
        assert!(store.list_all().unwrap().is_empty());
    }
}
