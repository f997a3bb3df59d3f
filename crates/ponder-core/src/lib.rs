//! # ponder-core
//!
//! Core contracts shared by Ponder plugins and the services that host them.
//!
//! - [`Persistable`] - the snapshot/restore contract every savable entity implements
//! - [`ColorResolver`] - turns human-friendly color names into [`CanonicalColor`] values
//!
//! Nothing in this crate performs I/O. Durable storage, scheduling and
//! configuration live in `ponder-host`.

pub mod color;
pub mod persist;

pub use color::{resolve, CanonicalColor, ColorResolver, PresetColor, Rgb};
pub use persist::{parse_field, parse_optional, require, Persistable, RestoreError, Snapshot};

/// Convenience re-exports for entity implementations.
pub mod prelude {
    pub use crate::color::{CanonicalColor, ColorResolver, Rgb};
    pub use crate::persist::{
        parse_field, parse_optional, require, Persistable, RestoreError, Snapshot,
    };
}
