//! Card reader polling.

use crate::error::Result;
use crate::traits::RfidReader;
use std::time::Duration;
use tagkeeper_core::CardId;
use tagkeeper_core::constants::DEFAULT_CARD_POLL_INTERVAL_MS;
use tokio::time;
use tracing::{debug, warn};

/// Polls an [`RfidReader`] at a fixed interval until a card shows up.
///
/// Transient read failures and undecodable UIDs are logged and polling
/// continues; any other reader error ends the wait.
#[derive(Debug)]
pub struct CardScanner<R> {
    reader: R,
    interval: Duration,
}

impl<R: RfidReader> CardScanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            interval: Duration::from_millis(DEFAULT_CARD_POLL_INTERVAL_MS),
        }
    }

    /// Set the delay between two polls.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Wait for the next card and return its identifier.
    ///
    /// # Errors
    ///
    /// Returns the reader error if the reader becomes unusable.
    pub async fn next_card(&mut self) -> Result<CardId> {
        loop {
            match self.reader.poll_card().await {
                Ok(Some(card)) => match card.card_id() {
                    Ok(id) => {
                        debug!(uid = %card.uid_hex(), card = %id, "Card detected");
                        return Ok(id);
                    }
                    Err(e) => warn!(uid = %card.uid_hex(), "Ignoring card: {}", e),
                },
                Ok(None) => {}
                Err(e) if e.is_transient() => warn!("Card read failed, retrying: {}", e),
                Err(e) => return Err(e),
            }

            time::sleep(self.interval).await;
        }
    }
}
