//! Date/time window handling for telemetry deletion
//!
//! Converts DD/MM/YYYY date and HH:MM time strings into epoch
//! milliseconds. The wall-clock instant is interpreted as UTC.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime};

use crate::{Error, Result};

/// Default start-of-day bound when no time is given.
pub const DAY_START: &str = "00:00";
/// Default end-of-day bound when no time is given.
pub const DAY_END: &str = "23:59";

/// Convert date and optional time strings to epoch milliseconds.
///
/// Date format: `DD/MM/YYYY`, time format: `HH:MM` (24-hour).
/// Midnight is used when no time is supplied.
pub fn to_epoch_millis(date_str: &str, time_str: Option<&str>) -> Result<i64> {
    let date = NaiveDate::parse_from_str(date_str, "%d/%m/%Y")
        .map_err(|e| Error::InvalidDateTime(format!("'{}': {}", date_str, e)))?;

    let time = match time_str {
        Some(t) => NaiveTime::parse_from_str(t, "%H:%M")
            .map_err(|e| Error::InvalidDateTime(format!("'{}': {}", t, e)))?,
        None => NaiveTime::MIN,
    };

    Ok(date.and_time(time).and_utc().timestamp_millis())
}

/// Inclusive deletion window in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletionWindow {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl DeletionWindow {
    /// Build a window, rejecting inverted ranges before any network call.
    pub fn new(start_ms: i64, end_ms: i64) -> Result<Self> {
        if start_ms > end_ms {
            return Err(Error::InvalidArgument(format!(
                "Range start {} is after range end {}",
                format_utc(start_ms),
                format_utc(end_ms)
            )));
        }
        Ok(Self { start_ms, end_ms })
    }
}

impl fmt::Display for DeletionWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            format_utc(self.start_ms),
            format_utc(self.end_ms)
        )
    }
}

fn format_utc(ms: i64) -> String {
    DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| format!("{} ms", ms))
}
