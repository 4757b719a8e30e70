use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::errors::{ScheduleError, ScheduleResult};
use crate::models::clock::{self, format_clock, parse_clock, truncate_to_minute};
use crate::models::day::Day;

/// One weekly meeting of a course.
///
/// Construction guarantees `start_time < end_time` and minute precision, so
/// every `Section` in the system has a positive duration and survives an
/// `HH:MM` round trip unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SectionFields")]
pub struct Section {
    day: Day,
    #[serde(with = "clock::hhmm")]
    start_time: NaiveTime,
    #[serde(with = "clock::hhmm")]
    end_time: NaiveTime,
}

#[derive(Deserialize)]
struct SectionFields {
    day: Day,
    #[serde(with = "clock::hhmm")]
    start_time: NaiveTime,
    #[serde(with = "clock::hhmm")]
    end_time: NaiveTime,
}

impl TryFrom<SectionFields> for Section {
    type Error = ScheduleError;

    fn try_from(fields: SectionFields) -> Result<Self, Self::Error> {
        Section::new(fields.day, fields.start_time, fields.end_time)
    }
}

impl Section {
    /// Creates a section, truncating both times to the minute.
    ///
    /// # Errors
    ///
    /// `ScheduleError::Validation` if the end time is not after the start time.
    pub fn new(day: Day, start_time: NaiveTime, end_time: NaiveTime) -> ScheduleResult<Self> {
        let start_time = truncate_to_minute(start_time);
        let end_time = truncate_to_minute(end_time);

        if end_time <= start_time {
            return Err(ScheduleError::Validation(format!(
                "End time must be after start time ({} - {})",
                format_clock(start_time),
                format_clock(end_time)
            )));
        }

        Ok(Self {
            day,
            start_time,
            end_time,
        })
    }

    /// Creates a section from `HH:MM` strings.
    pub fn parse(day: Day, start: &str, end: &str) -> ScheduleResult<Self> {
        Self::new(day, parse_clock(start)?, parse_clock(end)?)
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} - {}",
            self.day,
            format_clock(self.start_time),
            format_clock(self.end_time)
        )
    }
}
