//! The snapshot/restore contract for savable entities.
//!
//! An entity converts itself into a flat [`Snapshot`] of string keys to string
//! values and can rebuild its state from one. The storage layer never sees the
//! concrete entity type, only this capability.
//!
//! Implementations must obey the round-trip law: restoring a snapshot taken
//! from `e` produces an entity equal to `e` on every field the snapshot
//! declares.
//!
//! # Example
//!
//! ```
//! use ponder_core::prelude::*;
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Home {
//!     owner: String,
//!     x: i64,
//! }
//!
//! impl Persistable for Home {
//!     fn snapshot(&self) -> Snapshot {
//!         let mut data = Snapshot::new();
//!         data.insert("owner".to_string(), self.owner.clone());
//!         data.insert("x".to_string(), self.x.to_string());
//!         data
//!     }
//!
//!     fn restore(&mut self, data: &Snapshot) -> Result<(), RestoreError> {
//!         self.owner = require(data, "owner")?.to_string();
//!         self.x = parse_field(data, "x")?;
//!         Ok(())
//!     }
//! }
//!
//! let home = Home { owner: "steve".into(), x: -12 };
//! let mut copy = Home::default();
//! copy.restore(&home.snapshot()).unwrap();
//! assert_eq!(copy, home);
//! ```

use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// A string-keyed view of an entity's persisted fields.
///
/// Ordered so that two snapshots of the same state serialize identically.
pub type Snapshot = BTreeMap<String, String>;

/// A persisted mapping could not populate an entity's expected fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RestoreError {
    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Invalid value '{value}' for field '{field}': {reason}")]
    InvalidField {
        field: String,
        value: String,
        reason: String,
    },
}

impl RestoreError {
    /// Build an [`RestoreError::InvalidField`] from any displayable reason.
    pub fn invalid(field: &str, value: &str, reason: impl Display) -> Self {
        Self::InvalidField {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Capability implemented by every entity that can be saved and loaded.
pub trait Persistable {
    /// Capture the entity's current state.
    fn snapshot(&self) -> Snapshot;

    /// Overwrite the entity's state from a previously captured snapshot.
    ///
    /// Returns an error instead of partially applying data that does not fit
    /// the entity's shape.
    fn restore(&mut self, data: &Snapshot) -> Result<(), RestoreError>;
}

/// A raw snapshot is its own entity, for plugins that store loose key/value data.
impl Persistable for Snapshot {
    fn snapshot(&self) -> Snapshot {
        self.clone()
    }

    fn restore(&mut self, data: &Snapshot) -> Result<(), RestoreError> {
        self.clone_from(data);
        Ok(())
    }
}

/// Look up a field that must be present.
pub fn require<'a>(data: &'a Snapshot, field: &str) -> Result<&'a str, RestoreError> {
    data.get(field)
        .map(String::as_str)
        .ok_or_else(|| RestoreError::MissingField(field.to_string()))
}

/// Look up and parse a field that must be present.
pub fn parse_field<T>(data: &Snapshot, field: &str) -> Result<T, RestoreError>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = require(data, field)?;
    raw.parse()
        .map_err(|e| RestoreError::invalid(field, raw, e))
}

/// Parse a field that may be absent.
pub fn parse_optional<T>(data: &Snapshot, field: &str) -> Result<Option<T>, RestoreError>
where
    T: FromStr,
    T::Err: Display,
{
    match data.get(field) {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|e| RestoreError::invalid(field, raw, e)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Waypoint {
        name: String,
        world: String,
        x: i64,
        y: i64,
        z: i64,
        public: bool,
        icon: Option<String>,
    }

    impl Persistable for Waypoint {
        fn snapshot(&self) -> Snapshot {
            let mut data = Snapshot::new();
            data.insert("name".into(), self.name.clone());
            data.insert("world".into(), self.world.clone());
            data.insert("x".into(), self.x.to_string());
            data.insert("y".into(), self.y.to_string());
            data.insert("z".into(), self.z.to_string());
            data.insert("public".into(), self.public.to_string());
            if let Some(icon) = &self.icon {
                data.insert("icon".into(), icon.clone());
            }
            data
        }

        fn restore(&mut self, data: &Snapshot) -> Result<(), RestoreError> {
            self.name = require(data, "name")?.to_string();
            self.world = require(data, "world")?.to_string();
            self.x = parse_field(data, "x")?;
            self.y = parse_field(data, "y")?;
            self.z = parse_field(data, "z")?;
            self.public = parse_field(data, "public")?;
            self.icon = parse_optional(data, "icon")?;
            Ok(())
        }
    }

    fn sample() -> Waypoint {
        Waypoint {
            name: "Spawn Gate".into(),
            world: "overworld".into(),
            x: -120,
            y: 64,
            z: 8_000,
            public: true,
            icon: Some("beacon".into()),
        }
    }

    #[test]
    fn test_round_trip_restores_every_field() {
        let original = sample();
        let mut restored = Waypoint::default();
        restored.restore(&original.snapshot()).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_round_trip_without_optional_field() {
        let original = Waypoint {
            icon: None,
            ..sample()
        };
        let mut restored = sample();
        restored.restore(&original.snapshot()).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_restore_missing_field() {
        let mut data = sample().snapshot();
        data.remove("world");

        let err = Waypoint::default().restore(&data).unwrap_err();
        assert_eq!(err, RestoreError::MissingField("world".into()));
    }

    #[test]
    fn test_restore_invalid_field() {
        let mut data = sample().snapshot();
        data.insert("y".into(), "sixty-four".into());

        let err = Waypoint::default().restore(&data).unwrap_err();
        match err {
            RestoreError::InvalidField { field, value, .. } => {
                assert_eq!(field, "y");
                assert_eq!(value, "sixty-four");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_snapshot_is_deterministic() {
        let a = serde_json::to_string(&sample().snapshot()).unwrap();
        let b = serde_json::to_string(&sample().snapshot()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_raw_snapshot_round_trip() {
        let mut raw = Snapshot::new();
        raw.insert("motd".into(), "Welcome".into());

        let mut restored = Snapshot::new();
        restored.insert("stale".into(), "value".into());
        restored.restore(&raw.snapshot()).unwrap();
        assert_eq!(restored, raw);
    }

    #[test]
    fn test_error_display() {
        let err = RestoreError::invalid("x", "abc", "invalid digit found in string");
        assert_eq!(
            err.to_string(),
            "Invalid value 'abc' for field 'x': invalid digit found in string"
        );
    }
}
