//! Wall-clock helpers.
//!
//! Section times are stored as [`NaiveTime`] with minute precision and are
//! written as 24-hour `HH:MM` strings wherever they leave the process.

use chrono::{NaiveTime, Timelike};

use crate::errors::{ScheduleError, ScheduleResult};

/// Format used for every textual clock value.
pub const CLOCK_FORMAT: &str = "%H:%M";

/// Parses a 24-hour `HH:MM` string.
pub fn parse_clock(value: &str) -> ScheduleResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), CLOCK_FORMAT).map_err(|_| {
        ScheduleError::Validation(format!("Invalid time '{}', expected HH:MM", value.trim()))
    })
}

pub fn format_clock(time: NaiveTime) -> String {
    time.format(CLOCK_FORMAT).to_string()
}

/// Drops seconds and sub-second parts so a value survives an `HH:MM` round trip.
pub fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

/// Serde adapter writing a [`NaiveTime`] as `HH:MM`.
///
/// ```ignore
/// #[serde(with = "coursesched_core::models::clock::hhmm")]
/// start_time: NaiveTime,
/// ```
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use super::{format_clock, parse_clock};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_clock(*time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_clock(&raw).map_err(D::Error::custom)
    }
}
