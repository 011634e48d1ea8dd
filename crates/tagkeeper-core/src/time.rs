//! Local wall-clock timestamps.

use crate::constants::{EVENT_FILE_PREFIX, JSON_EXTENSION, LOG_TIME_FORMAT, UNKNOWN_TIME};
use crate::{Result, error::Error};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use std::fmt;

/// A local date and time as read from the terminal clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalTimestamp(NaiveDateTime);

impl LocalTimestamp {
    pub fn new(inner: NaiveDateTime) -> Self {
        Self(inner)
    }

    /// Build a timestamp from calendar fields.
    ///
    /// # Errors
    /// Returns `Error::InvalidTimestamp` if the fields do not name a real
    /// date and time.
    pub fn from_ymd_hm(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, 0))
            .map(Self)
            .ok_or_else(|| {
                Error::InvalidTimestamp(format!(
                    "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}"
                ))
            })
    }

    pub fn inner(&self) -> NaiveDateTime {
        self.0
    }

    /// Log format: `dd-mm-yy hh:mm`.
    pub fn format(&self) -> String {
        self.0.format(LOG_TIME_FORMAT).to_string()
    }

    /// Attendance file name: `E_{yy}{mm}{dd}_{hh}{mm}.json`.
    ///
    /// ```
    /// use tagkeeper_core::LocalTimestamp;
    ///
    /// let ts = LocalTimestamp::from_ymd_hm(2025, 5, 10, 12, 46).unwrap();
    /// assert_eq!(ts.event_file_name(), "E_250510_1246.json");
    /// ```
    pub fn event_file_name(&self) -> String {
        let dt = self.0;
        format!(
            "{EVENT_FILE_PREFIX}{:02}{:02}{:02}_{:02}{:02}{JSON_EXTENSION}",
            dt.year().rem_euclid(100),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute()
        )
    }
}

impl From<NaiveDateTime> for LocalTimestamp {
    fn from(inner: NaiveDateTime) -> Self {
        Self(inner)
    }
}

impl fmt::Display for LocalTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

/// Format `time` for a log record, or the `"Unknown Time"` placeholder.
pub fn format_or_placeholder(time: Option<&LocalTimestamp>) -> String {
    time.map_or_else(|| UNKNOWN_TIME.to_string(), LocalTimestamp::format)
}
