use std::time::Duration;
use tagkeeper_core::constants::{DEFAULT_WIFI_POLL_INTERVAL_MS, DEFAULT_WIFI_RETRY_ATTEMPTS};
use tokio::time;
use tracing::trace;

/// Bounded polling of a readiness condition.
///
/// The condition is checked once up front and once after each of up to
/// `attempts` sleeps of `interval`.
///
/// # Example
///
/// ```
/// use tagkeeper_network::RetryPolicy;
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() {
/// let policy = RetryPolicy::new(3, Duration::from_millis(10));
/// let mut checks = 0;
/// let ready = policy.poll_until(|| { checks += 1; checks == 2 }).await;
/// assert!(ready);
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of waits before giving up
    pub attempts: u32,

    /// Delay between two checks
    pub interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_WIFI_RETRY_ATTEMPTS,
            interval: Duration::from_millis(DEFAULT_WIFI_POLL_INTERVAL_MS),
        }
    }
}

impl RetryPolicy {
    pub fn new(attempts: u32, interval: Duration) -> Self {
        Self { attempts, interval }
    }

    /// Poll `ready` until it holds or the attempts run out.
    ///
    /// Returns the final value of the condition.
    pub async fn poll_until(&self, mut ready: impl FnMut() -> bool) -> bool {
        let mut remaining = self.attempts;
        while !ready() {
            if remaining == 0 {
                return false;
            }
            trace!(remaining, "Condition not met, waiting");
            time::sleep(self.interval).await;
            remaining -= 1;
        }
        true
    }
}
