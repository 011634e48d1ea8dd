//! Mock RFID reader implementation for testing and development.
//!
//! This module provides a simulated RFID reader that can be controlled
//! programmatically for testing without requiring physical hardware.

use crate::{
    HardwareError, Result,
    traits::{CardData, RfidReader},
    types::ReaderInfo,
};
use tagkeeper_core::CardId;
use tokio::sync::mpsc::{self, error::TryRecvError};

/// Mock RFID reader for testing and development.
///
/// Cards and read failures queued through the [`MockRfidHandle`] are
/// delivered one per poll. An empty queue polls as "no card"; once every
/// handle is dropped the reader reports itself disconnected.
///
/// # Examples
///
/// ```
/// use tagkeeper_hardware::mock::MockRfid;
/// use tagkeeper_hardware::traits::RfidReader;
///
/// #[tokio::main]
/// async fn main() -> tagkeeper_hardware::Result<()> {
///     let (mut reader, handle) = MockRfid::new();
///
///     assert!(reader.poll_card().await?.is_none());
///
///     handle.present_uid(vec![0x04, 0xAB, 0xCD, 0xEF]).await?;
///     let card = reader.poll_card().await?.unwrap();
///     assert_eq!(card.uid_hex(), "04ABCDEF");
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct MockRfid {
    /// Channel receiver for card events
    event_rx: mpsc::Receiver<CardEvent>,

    /// Device name
    name: String,
}

impl MockRfid {
    /// Create a new mock RFID reader with the default name.
    ///
    /// Returns a tuple of (MockRfid, MockRfidHandle) where the handle
    /// can be used to simulate card presentations.
    pub fn new() -> (Self, MockRfidHandle) {
        Self::with_name("Mock RC522".to_string())
    }

    /// Create a new mock RFID reader with a custom name.
    pub fn with_name(name: String) -> (Self, MockRfidHandle) {
        let (event_tx, event_rx) = mpsc::channel(32);

        let reader = Self { event_rx, name };
        let handle = MockRfidHandle { event_tx };

        (reader, handle)
    }
}

impl RfidReader for MockRfid {
    async fn poll_card(&mut self) -> Result<Option<CardData>> {
        match self.event_rx.try_recv() {
            Ok(CardEvent::Presented(card)) => Ok(Some(card)),
            Ok(CardEvent::ReadError(message)) => Err(HardwareError::card_read(message)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => {
                Err(HardwareError::disconnected("RFID event channel closed"))
            }
        }
    }

    async fn reader_info(&self) -> Result<ReaderInfo> {
        Ok(ReaderInfo::new(
            self.name.clone(),
            vec!["ISO14443A".to_string()],
        ))
    }
}

/// Internal event type for mock RFID reader.
#[derive(Debug, Clone)]
enum CardEvent {
    Presented(CardData),
    ReadError(String),
}

/// Handle for controlling a mock RFID reader.
///
/// Cloneable; every clone feeds the same reader.
#[derive(Debug, Clone)]
pub struct MockRfidHandle {
    /// Channel sender for card events
    event_tx: mpsc::Sender<CardEvent>,
}

impl MockRfidHandle {
    /// Present a card by its raw UID bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The UID length is invalid
    /// - The reader has been dropped and the channel is closed
    pub async fn present_uid(&self, uid: Vec<u8>) -> Result<()> {
        let card = CardData::new(uid)?;
        self.send(CardEvent::Presented(card)).await
    }

    /// Present the card whose decimal identifier is `id`.
    pub async fn present_id(&self, id: &CardId) -> Result<()> {
        let card = CardData::from_card_id(id)?;
        self.send(CardEvent::Presented(card)).await
    }

    /// Make the next poll fail with a transient read error.
    pub async fn inject_read_error(&self, message: impl Into<String>) -> Result<()> {
        self.send(CardEvent::ReadError(message.into())).await
    }

    async fn send(&self, event: CardEvent) -> Result<()> {
        self.event_tx
            .send(event)
            .await
            .map_err(|_| HardwareError::disconnected("RFID event channel closed"))
    }
}
