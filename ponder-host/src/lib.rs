//! Ponder host library
//!
//! Host-side services offered to plugins: configuration, command dispatch,
//! entity storage with hourly autosave, and color resolution.

pub mod commands;
pub mod config;
pub mod logging;
pub mod registry;
pub mod scheduler;
pub mod storage;
pub mod toolbox;
