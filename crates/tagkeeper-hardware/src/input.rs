//! Debounced button input.
//!
//! Every accepted press is followed by a fixed settle delay so contact
//! bounce on the physical buttons never produces a second event. Waits can
//! be bounded; an expired wait reports "no press" instead of an error so
//! menus can implement their idle timeout directly on top of it.

use crate::error::Result;
use crate::traits::ButtonPad;
use crate::types::Button;
use std::time::Duration;
use tagkeeper_core::constants::DEFAULT_DEBOUNCE_MS;
use tokio::time;
use tracing::{debug, trace};

/// Debounced event source over a [`ButtonPad`].
#[derive(Debug)]
pub struct InputController<B> {
    pad: B,
    debounce: Duration,
}

impl<B: ButtonPad> InputController<B> {
    /// Wrap a button pad with the default debounce delay.
    pub fn new(pad: B) -> Self {
        Self {
            pad,
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }

    /// Set the delay applied after every accepted press.
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Current debounce delay.
    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Wait for the next press.
    ///
    /// With `timeout` set, returns `Ok(None)` once the window expires without
    /// a press. With `None` the wait is unbounded.
    ///
    /// # Errors
    ///
    /// Propagates device errors from the underlying pad.
    pub async fn wait_press(&mut self, timeout: Option<Duration>) -> Result<Option<Button>> {
        let button = match timeout {
            Some(limit) => match time::timeout(limit, self.pad.next_press()).await {
                Ok(press) => press?,
                Err(_) => {
                    trace!("No button press within {}ms", limit.as_millis());
                    return Ok(None);
                }
            },
            None => self.pad.next_press().await?,
        };

        debug!(%button, "Button pressed");
        time::sleep(self.debounce).await;
        Ok(Some(button))
    }

    /// Wait, without a deadline, until `button` is pressed. Other presses
    /// are consumed and ignored.
    pub async fn wait_for(&mut self, button: Button) -> Result<()> {
        loop {
            if self.wait_press(None).await? == Some(button) {
                return Ok(());
            }
        }
    }
}
