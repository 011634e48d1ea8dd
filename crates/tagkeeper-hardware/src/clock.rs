//! Host wall clock.

use crate::error::{HardwareError, Result};
use crate::traits::Clock;
use chrono::{Datelike, FixedOffset, Offset, Utc};
use tagkeeper_core::LocalTimestamp;
use tagkeeper_core::constants::DEFAULT_UTC_OFFSET_SECS;

/// Earliest year accepted as a synchronized time.
///
/// An unsynchronized real-time clock starts at the epoch.
const MIN_SYNCED_YEAR: i32 = 2020;

/// Local time from the system clock shifted by a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    /// Create a clock for the given offset from UTC in seconds.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the offset is out of range (±24h).
    pub fn new(utc_offset_secs: i32) -> Result<Self> {
        let offset = FixedOffset::east_opt(utc_offset_secs).ok_or_else(|| {
            HardwareError::configuration(format!("Invalid UTC offset: {utc_offset_secs}s"))
        })?;
        Ok(Self { offset })
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            offset: FixedOffset::east_opt(DEFAULT_UTC_OFFSET_SECS).unwrap_or(Utc.fix()),
        }
    }
}

impl Clock for SystemClock {
    async fn local_time(&mut self) -> Result<LocalTimestamp> {
        let now = Utc::now().with_timezone(&self.offset).naive_local();
        if now.year() < MIN_SYNCED_YEAR {
            return Err(HardwareError::clock_unavailable(format!(
                "clock reads year {}",
                now.year()
            )));
        }
        Ok(LocalTimestamp::new(now))
    }
}
