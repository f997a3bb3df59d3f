//! In-memory record store, for hosts that don't need durability and for tests.

use ponder_core::Snapshot;
use std::collections::{BTreeMap, HashSet};
use std::sync::{PoisonError, RwLock};

use super::{RecordStore, Result};

/// Records held in a map for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: RwLock<BTreeMap<String, Snapshot>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordStore for MemoryRecordStore {
    fn write_record(&self, id: &str, data: &Snapshot) -> Result<()> {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.to_string(), data.clone());
        Ok(())
    }

    fn read_all_records(&self) -> Result<Vec<(String, Snapshot)>> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        Ok(records
            .iter()
            .map(|(id, data)| (id.clone(), data.clone()))
            .collect())
    }

    fn remove_records_except(&self, keep: &[String]) -> Result<usize> {
        let keep: HashSet<&str> = keep.iter().map(String::as_str).collect();
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        let before = records.len();
        records.retain(|id, _| keep.contains(id.as_str()));
        Ok(before - records.len())
    }
}
