//! ThingsBoard Telemetry Cleaner Library
//!
//! This library provides tools to:
//! - Convert DD/MM/YYYY date and HH:MM time strings to epoch milliseconds (UTC)
//! - Authenticate against a ThingsBoard instance
//! - Resolve device display names to internal device UUIDs
//! - Delete device timeseries data over a given window

pub mod config;
pub mod error;
pub mod thingsboard;
pub mod timerange;

// Re-export common types
pub use config::TbConfig;
pub use error::{Error, Result};
pub use thingsboard::ThingsBoardClient;
pub use timerange::{to_epoch_millis, DeletionWindow, DAY_END, DAY_START};

// Commands module uses re-exported types, so it must be declared after the re-exports
pub mod commands;
