//! Mock clock with a settable time.

use super::lock;
use crate::{HardwareError, Result, traits::Clock};
use chrono::TimeDelta;
use std::sync::{Arc, Mutex};
use tagkeeper_core::LocalTimestamp;

/// Mock clock. Reads fail while no time is set.
#[derive(Debug)]
pub struct MockClock {
    now: Arc<Mutex<Option<LocalTimestamp>>>,
}

impl MockClock {
    /// Create a clock frozen at `now`.
    pub fn new(now: LocalTimestamp) -> (Self, MockClockHandle) {
        Self::from_state(Some(now))
    }

    /// Create a clock that has never been synchronized.
    pub fn unsynchronized() -> (Self, MockClockHandle) {
        Self::from_state(None)
    }

    fn from_state(now: Option<LocalTimestamp>) -> (Self, MockClockHandle) {
        let now = Arc::new(Mutex::new(now));
        (
            Self {
                now: Arc::clone(&now),
            },
            MockClockHandle { now },
        )
    }
}

impl Clock for MockClock {
    async fn local_time(&mut self) -> Result<LocalTimestamp> {
        (*lock(&self.now)).ok_or_else(|| HardwareError::clock_unavailable("not synchronized"))
    }
}

/// Control handle for a [`MockClock`].
#[derive(Debug, Clone)]
pub struct MockClockHandle {
    now: Arc<Mutex<Option<LocalTimestamp>>>,
}

impl MockClockHandle {
    /// Set the time returned by subsequent reads.
    pub fn set(&self, now: LocalTimestamp) {
        *lock(&self.now) = Some(now);
    }

    /// Make subsequent reads fail.
    pub fn fail(&self) {
        *lock(&self.now) = None;
    }

    /// Move the clock forward. No effect while unsynchronized.
    pub fn advance_minutes(&self, minutes: i64) {
        let mut now = lock(&self.now);
        if let Some(ts) = *now {
            *now = Some(LocalTimestamp::new(ts.inner() + TimeDelta::minutes(minutes)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_clock_set_and_advance() {
        let start = LocalTimestamp::from_ymd_hm(2025, 5, 10, 12, 46).unwrap();
        let (mut clock, handle) = MockClock::new(start);

        assert_eq!(clock.local_time().await.unwrap(), start);

        handle.advance_minutes(15);
        assert_eq!(clock.local_time().await.unwrap().format(), "10-05-25 13:01");
    }

    #[tokio::test]
    async fn test_mock_clock_failure() {
        let (mut clock, handle) = MockClock::unsynchronized();
        assert!(matches!(
            clock.local_time().await,
            Err(HardwareError::ClockUnavailable { .. })
        ));

        handle.set(LocalTimestamp::from_ymd_hm(2025, 1, 1, 0, 0).unwrap());
        assert!(clock.local_time().await.is_ok());

        handle.fail();
        assert!(clock.local_time().await.is_err());
    }
}
