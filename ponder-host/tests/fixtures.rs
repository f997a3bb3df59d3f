//! Test fixtures for integration tests.
//!
//! This module provides a sample savable entity and helpers for building
//! storage services around temporary databases.

#![allow(dead_code)]

use ponder_core::{parse_field, parse_optional, require, Persistable, RestoreError, Snapshot};
use ponder_host::storage::{SqliteRecordStore, StorageService};
use std::sync::Arc;
use tempfile::TempDir;

/// A player home, as a homes plugin would store it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Home {
    pub owner: String,
    pub world: String,
    pub x: i64,
    pub y: i64,
    pub z: i64,
    pub marker_color: Option<String>,
}

impl Persistable for Home {
    fn snapshot(&self) -> Snapshot {
        let mut data = Snapshot::new();
        data.insert("owner".to_string(), self.owner.clone());
        data.insert("world".to_string(), self.world.clone());
        data.insert("x".to_string(), self.x.to_string());
        data.insert("y".to_string(), self.y.to_string());
        data.insert("z".to_string(), self.z.to_string());
        if let Some(color) = &self.marker_color {
            data.insert("marker_color".to_string(), color.clone());
        }
        data
    }

    fn restore(&mut self, data: &Snapshot) -> Result<(), RestoreError> {
        self.owner = require(data, "owner")?.to_string();
        self.world = require(data, "world")?.to_string();
        self.x = parse_field(data, "x")?;
        self.y = parse_field(data, "y")?;
        self.z = parse_field(data, "z")?;
        self.marker_color = parse_optional(data, "marker_color")?;
        Ok(())
    }
}

/// Creates a home for `owner` at the given block position.
pub fn create_test_home(owner: &str, x: i64, y: i64, z: i64) -> Home {
    Home {
        owner: owner.to_string(),
        world: "world".to_string(),
        x,
        y,
        z,
        marker_color: None,
    }
}

/// Creates `count` homes keyed `home-0`, `home-1`, ...
pub fn create_test_homes(count: usize) -> Vec<(String, Home)> {
    (0..count)
        .map(|i| {
            let n = i as i64;
            (
                format!("home-{}", i),
                create_test_home(&format!("player{}", i), n * 10, 64, -n * 10),
            )
        })
        .collect()
}

/// Opens a fresh SQLite store in a temporary directory.
pub fn create_test_store() -> (SqliteRecordStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("storage.db");
    let store = SqliteRecordStore::open_at(&path).unwrap().collection("homes");
    (store, temp_dir)
}

/// A homes storage service over `store`.
pub fn create_home_storage(store: &SqliteRecordStore) -> StorageService<Home> {
    StorageService::new("homes", Arc::new(store.clone()))
}
