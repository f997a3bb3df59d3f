//! SQLite-backed record store.
//!
//! Records live in a single database, by default at
//! `$XDG_DATA_HOME/ponder/storage.db`. Several storage services can share one
//! database; each works in its own named collection.
//!
//! # Database Schema
//!
//! - `records`: one row per `(collection, id)`, the snapshot stored as a JSON object
//! - `schema_version`: Migration tracking

use directories::ProjectDirs;
use ponder_core::Snapshot;
use rusqlite::{params, Connection};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};

use super::{RecordStore, Result, StorageError};

const DEFAULT_COLLECTION: &str = "default";

/// SQLite implementation of [`RecordStore`].
///
/// The connection is wrapped in a `Mutex` so writes from concurrent saves are
/// serialized, and in an `Arc` so collections can share it.
#[derive(Clone)]
pub struct SqliteRecordStore {
    conn: Arc<Mutex<Connection>>,
    collection: String,
}

impl SqliteRecordStore {
    /// Open the database at the default XDG location.
    pub fn open() -> Result<Self> {
        Self::open_at(Self::default_db_path()?)
    }

    /// Open the database at a specific path, creating it if it doesn't exist.
    pub fn open_at(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        info!("Opening storage database at: {:?}", path);
        Self::from_connection(Connection::open(path)?)
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
            collection: DEFAULT_COLLECTION.to_string(),
        };
        store.run_migrations()?;
        Ok(store)
    }

    /// A handle to the same database scoped to another collection.
    pub fn collection(&self, name: impl Into<String>) -> Self {
        Self {
            conn: Arc::clone(&self.conn),
            collection: name.into(),
        }
    }

    pub fn collection_name(&self) -> &str {
        &self.collection
    }

    fn default_db_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("", "preponderous", "ponder").ok_or_else(|| {
            StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Failed to determine project directories",
            ))
        })?;

        Ok(project_dirs.data_dir().join("storage.db"))
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StorageError::Poisoned)
    }

    /// Run database migrations to set up the schema.
    fn run_migrations(&self) -> Result<()> {
        let mut conn = self.lock()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS schema_version (
                version INTEGER PRIMARY KEY
            )",
            [],
        )?;

        let current_version: i32 = conn.query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        )?;

        debug!("Current schema version: {}", current_version);

        if current_version < 1 {
            info!("Running migration to schema version 1");

            let tx = conn.transaction()?;
            tx.execute(
                "CREATE TABLE IF NOT EXISTS records (
                    collection TEXT NOT NULL,
                    id TEXT NOT NULL,
                    data TEXT NOT NULL,
                    PRIMARY KEY (collection, id)
                )",
                [],
            )?;
            tx.execute("INSERT INTO schema_version (version) VALUES (1)", [])?;
            tx.commit()?;
        }

        Ok(())
    }

    /// The stored JSON text of every record in this collection, ordered by id.
    pub fn raw_records(&self) -> Result<Vec<(String, String)>> {
        let conn = self.lock()?;
        let mut stmt =
            conn.prepare("SELECT id, data FROM records WHERE collection = ?1 ORDER BY id")?;
        let rows = stmt
            .query_map([&self.collection], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

impl RecordStore for SqliteRecordStore {
    fn write_record(&self, id: &str, data: &Snapshot) -> Result<()> {
        let json = serde_json::to_string(data).map_err(|source| StorageError::Encode {
            id: id.to_string(),
            source,
        })?;

        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO records (collection, id, data) VALUES (?1, ?2, ?3)
             ON CONFLICT(collection, id) DO UPDATE SET data = excluded.data",
            params![self.collection, id, json],
        )?;
        Ok(())
    }

    fn read_all_records(&self) -> Result<Vec<(String, Snapshot)>> {
        self.raw_records()?
            .into_iter()
            .map(|(id, json)| match serde_json::from_str(&json) {
                Ok(data) => Ok((id, data)),
                Err(source) => Err(StorageError::Decode { id, source }),
            })
            .collect()
    }

    fn remove_records_except(&self, keep: &[String]) -> Result<usize> {
        let keep: HashSet<&str> = keep.iter().map(String::as_str).collect();

        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        let stale: Vec<String> = {
            let mut stmt = tx.prepare("SELECT id FROM records WHERE collection = ?1")?;
            let ids = stmt
                .query_map([&self.collection], |row| row.get::<_, String>(0))?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            ids.into_iter()
                .filter(|id| !keep.contains(id.as_str()))
                .collect()
        };

        for id in &stale {
            tx.execute(
                "DELETE FROM records WHERE collection = ?1 AND id = ?2",
                params![self.collection, id],
            )?;
        }
        tx.commit()?;

        if !stale.is_empty() {
            debug!(collection = %self.collection, "Pruned {} stale record(s)", stale.len());
        }
        Ok(stale.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(pairs: &[(&str, &str)]) -> Snapshot {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn create_test_store() -> (SqliteRecordStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.db");
        let store = SqliteRecordStore::open_at(&path).unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_write_and_read() {
        let (store, _dir) = create_test_store();
        let data = record(&[("owner", "alex"), ("x", "10")]);
        store.write_record("home-1", &data).unwrap();

        let records = store.read_all_records().unwrap();
        assert_eq!(records, vec![("home-1".to_string(), data)]);
    }

    #[test]
    fn test_write_replaces_existing() {
        let (store, _dir) = create_test_store();
        store.write_record("a", &record(&[("v", "1")])).unwrap();
        store.write_record("a", &record(&[("v", "2")])).unwrap();

        let records = store.read_all_records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].1["v"], "2");
    }

    #[test]
    fn test_collections_are_isolated() {
        let (store, _dir) = create_test_store();
        let homes = store.collection("homes");
        let factions = store.collection("factions");

        homes.write_record("a", &record(&[("kind", "home")])).unwrap();
        factions
            .write_record("a", &record(&[("kind", "faction")]))
            .unwrap();

        assert_eq!(homes.read_all_records().unwrap()[0].1["kind"], "home");
        assert_eq!(factions.read_all_records().unwrap()[0].1["kind"], "faction");
        assert!(store.read_all_records().unwrap().is_empty());

        factions.remove_records_except(&[]).unwrap();
        assert_eq!(homes.read_all_records().unwrap().len(), 1);
    }

    #[test]
    fn test_remove_records_except() {
        let (store, _dir) = create_test_store();
        for id in ["a", "b", "c"] {
            store.write_record(id, &record(&[("id", id)])).unwrap();
        }

        let removed = store
            .remove_records_except(&["a".to_string(), "c".to_string()])
            .unwrap();
        assert_eq!(removed, 1);

        let ids: Vec<String> = store
            .read_all_records()
            .unwrap()
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(ids, vec!["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_reopen_preserves_records() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.db");

        {
            let store = SqliteRecordStore::open_at(&path).unwrap();
            store.write_record("a", &record(&[("v", "1")])).unwrap();
        }

        let store = SqliteRecordStore::open_at(&path).unwrap();
        assert_eq!(store.read_all_records().unwrap().len(), 1);
    }

    #[test]
    fn test_corrupt_record_is_reported() {
        let store = SqliteRecordStore::open_in_memory().unwrap();
        {
            let conn = store.lock().unwrap();
            conn.execute(
                "INSERT INTO records (collection, id, data) VALUES ('default', 'bad', 'not json')",
                [],
            )
            .unwrap();
        }

        match store.read_all_records() {
            Err(StorageError::Decode { id, .. }) => assert_eq!(id, "bad"),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_stored_json_is_stable() {
        let store = SqliteRecordStore::open_in_memory().unwrap();
        let data = record(&[("z", "last"), ("a", "first")]);
        store.write_record("a", &data).unwrap();

        let raw = store.raw_records().unwrap();
        assert_eq!(raw[0].1, r#"{"a":"first","z":"last"}"#);
    }
}
