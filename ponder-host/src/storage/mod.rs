//! Entity storage for plugins.
//!
//! A [`StorageService`] owns a keyed collection of [`Persistable`] entities and
//! moves them to and from a [`RecordStore`], the durable medium. Each entity is
//! stored as one record: its id plus the [`Snapshot`] it produces.
//!
//! # Example
//!
//! ```no_run
//! use ponder_host::storage::{SqliteRecordStore, StorageService};
//! use ponder_core::Snapshot;
//! use std::sync::Arc;
//!
//! # fn example() -> anyhow::Result<()> {
//! let store = SqliteRecordStore::open_at("storage.db")?.collection("homes");
//! let storage: StorageService<Snapshot> = StorageService::new("homes", Arc::new(store));
//!
//! storage.load()?;
//! storage.insert("steve", Snapshot::new());
//! storage.save()?;
//! # Ok(())
//! # }
//! ```

mod memory;
mod sqlite;

pub use memory::MemoryRecordStore;
pub use sqlite::SqliteRecordStore;

use chrono::{DateTime, Utc};
use ponder_core::{Persistable, RestoreError, Snapshot};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::scheduler::Autosave;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode record '{id}': {source}")]
    Encode {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to decode record '{id}': {source}")]
    Decode {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to restore record '{id}': {source}")]
    Restore {
        id: String,
        #[source]
        source: RestoreError,
    },

    #[error("Record '{0}' was read more than once")]
    DuplicateRecord(String),

    #[error("Record store lock poisoned")]
    Poisoned,

    #[error("Saved {saved} of {total} records, {} failed", .failures.len())]
    PartialSave {
        saved: usize,
        total: usize,
        failures: Vec<(String, StorageError)>,
    },
}

pub type Result<T> = std::result::Result<T, StorageError>;

// ============================================================================
// RecordStore Trait
// ============================================================================

/// A durable medium holding one record per entity id.
pub trait RecordStore: Send + Sync {
    /// Insert or replace the record for `id`.
    fn write_record(&self, id: &str, data: &Snapshot) -> Result<()>;

    /// Read every stored record.
    fn read_all_records(&self) -> Result<Vec<(String, Snapshot)>>;

    /// Delete every record whose id is not in `keep`. Returns the number deleted.
    fn remove_records_except(&self, keep: &[String]) -> Result<usize>;
}

// ============================================================================
// StorageService
// ============================================================================

/// Outcome of a successful [`StorageService::save`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    /// Number of records written
    pub saved: usize,
    /// Number of stale records removed from the store
    pub pruned: usize,
    pub finished_at: DateTime<Utc>,
}

/// Owns a collection of entities and orchestrates saving and loading them.
///
/// The collection sits behind a read/write lock. Mutations take the write side.
/// [`save`](Self::save) holds the read side only while snapshotting, then
/// writes to the store with the collection unlocked, so each save writes a
/// consistent cut. Saves and loads are serialized against each other, so a
/// save that snapshotted earlier never finishes after one that snapshotted
/// later.
pub struct StorageService<E> {
    name: String,
    store: Arc<dyn RecordStore>,
    entities: RwLock<BTreeMap<String, E>>,
    io_lock: Mutex<()>,
    last_save: RwLock<Option<DateTime<Utc>>>,
}

impl<E> StorageService<E>
where
    E: Persistable + Default + Send + Sync,
{
    pub fn new(name: impl Into<String>, store: Arc<dyn RecordStore>) -> Self {
        Self {
            name: name.into(),
            store,
            entities: RwLock::new(BTreeMap::new()),
            io_lock: Mutex::new(()),
            last_save: RwLock::new(None),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn read_entities(&self) -> RwLockReadGuard<'_, BTreeMap<String, E>> {
        self.entities.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_entities(&self) -> RwLockWriteGuard<'_, BTreeMap<String, E>> {
        self.entities.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add or replace an entity, returning the one it replaced.
    pub fn insert(&self, id: impl Into<String>, entity: E) -> Option<E> {
        self.write_entities().insert(id.into(), entity)
    }

    /// Remove an entity. Its record is pruned from the store on the next save.
    pub fn remove(&self, id: &str) -> Option<E> {
        self.write_entities().remove(id)
    }

    /// Mutate an entity in place.
    pub fn update<R>(&self, id: &str, f: impl FnOnce(&mut E) -> R) -> Option<R> {
        self.write_entities().get_mut(id).map(f)
    }

    /// Read an entity without cloning it.
    pub fn with_entity<R>(&self, id: &str, f: impl FnOnce(&E) -> R) -> Option<R> {
        self.read_entities().get(id).map(f)
    }

    pub fn get(&self, id: &str) -> Option<E>
    where
        E: Clone,
    {
        self.read_entities().get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.read_entities().contains_key(id)
    }

    pub fn ids(&self) -> Vec<String> {
        self.read_entities().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.read_entities().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_entities().is_empty()
    }

    pub fn last_save(&self) -> Option<DateTime<Utc>> {
        *self.last_save.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot every entity and write it to the store.
    ///
    /// A failed record does not stop the rest of the batch. All failures are
    /// returned together as [`StorageError::PartialSave`], and records written
    /// before or after a failure stay intact. Stale records are pruned only
    /// when every write succeeded. Concurrent saves run one after another.
    pub fn save(&self) -> Result<SaveReport> {
        let _io = self.io_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let records: Vec<(String, Snapshot)> = {
            let entities = self.read_entities();
            entities
                .iter()
                .map(|(id, entity)| (id.clone(), entity.snapshot()))
                .collect()
        };
        let total = records.len();
        debug!(storage = %self.name, "Saving {} record(s)", total);

        let mut failures = Vec::new();
        for (id, data) in &records {
            if let Err(e) = self.store.write_record(id, data) {
                warn!(storage = %self.name, record = %id, "Failed to write record: {}", e);
                failures.push((id.clone(), e));
            }
        }

        if !failures.is_empty() {
            return Err(StorageError::PartialSave {
                saved: total - failures.len(),
                total,
                failures,
            });
        }

        let keep: Vec<String> = records.into_iter().map(|(id, _)| id).collect();
        let pruned = self.store.remove_records_except(&keep)?;

        let finished_at = Utc::now();
        *self.last_save.write().unwrap_or_else(PoisonError::into_inner) = Some(finished_at);

        info!(
            storage = %self.name,
            "Saved {} record(s), pruned {}",
            total, pruned
        );

        Ok(SaveReport {
            saved: total,
            pruned,
            finished_at,
        })
    }

    /// Replace the live collection with every record in the store.
    ///
    /// Fails without touching the live collection if any record cannot be
    /// restored. Returns the number of entities restored.
    pub fn load(&self) -> Result<usize> {
        let _io = self.io_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let records = self.store.read_all_records()?;

        let mut restored = BTreeMap::new();
        for (id, data) in records {
            let mut entity = E::default();
            entity
                .restore(&data)
                .map_err(|source| StorageError::Restore {
                    id: id.clone(),
                    source,
                })?;

            if restored.contains_key(&id) {
                return Err(StorageError::DuplicateRecord(id));
            }
            restored.insert(id, entity);
        }

        let count = restored.len();
        *self.write_entities() = restored;

        info!(storage = %self.name, "Loaded {} record(s)", count);
        Ok(count)
    }
}

impl<E> Autosave for StorageService<E>
where
    E: Persistable + Default + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn autosave(&self) {
        match self.save() {
            Ok(report) => debug!(
                storage = %self.name,
                "Autosave wrote {} record(s)",
                report.saved
            ),
            Err(e) => error!(storage = %self.name, "Autosave failed: {}", e),
        }
    }
}
