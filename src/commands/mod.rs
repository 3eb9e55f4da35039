//! Command implementations
//!
//! Each module corresponds to one CLI binary.

pub mod delete_telemetry;
