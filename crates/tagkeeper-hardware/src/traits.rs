//! Peripheral trait definitions.
//!
//! This module defines the capability interfaces the terminal core consumes:
//! card reader, buttons, character display, status indicator, clock, Wi-Fi
//! radio and the operator console. Each has a mock implementation in
//! [`crate::mock`] and can be backed by a real driver on the device.
//!
//! All traits use native `async fn` methods (Rust 1.90 + Edition 2024 RPITIT),
//! eliminating the need for the `async_trait` macro.

#![allow(async_fn_in_trait)]

use crate::error::{HardwareError, Result};
use crate::types::{Button, LedColor, ReaderInfo};
use std::net::Ipv4Addr;
use tagkeeper_core::constants::MAX_UID_LENGTH;
use tagkeeper_core::{CardId, LocalTimestamp};

/// Shortest UID the reader reports (ISO 14443 single-size UID).
pub const MIN_UID_LENGTH: usize = 4;

/// RFID card data.
///
/// Contains the raw UID delivered by the reader and the instant it was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardData {
    /// Card unique identifier, least significant byte first.
    pub uid: Vec<u8>,

    /// Timestamp when the card was read.
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl CardData {
    /// Create new card data with the current timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the UID is empty or longer than
    /// [`MAX_UID_LENGTH`] bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagkeeper_hardware::traits::CardData;
    ///
    /// let card = CardData::new(vec![0x04, 0xAB, 0xCD, 0xEF]).unwrap();
    /// assert_eq!(card.uid_hex(), "04ABCDEF");
    /// ```
    pub fn new(uid: Vec<u8>) -> Result<Self> {
        if uid.is_empty() || uid.len() > MAX_UID_LENGTH {
            return Err(HardwareError::invalid_data(format!(
                "Card UID length must be between 1 and {MAX_UID_LENGTH} bytes, got {}",
                uid.len()
            )));
        }

        Ok(Self {
            uid,
            timestamp: chrono::Utc::now(),
        })
    }

    /// Encode a decimal card identifier back into the UID bytes a reader
    /// would deliver for it (little-endian, at least [`MIN_UID_LENGTH`] bytes).
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier does not fit in a UID.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagkeeper_core::CardId;
    /// use tagkeeper_hardware::traits::CardData;
    ///
    /// let id = CardId::new("67305985").unwrap();
    /// let card = CardData::from_card_id(&id).unwrap();
    /// assert_eq!(card.uid, vec![0x01, 0x02, 0x03, 0x04]);
    /// assert_eq!(card.card_id().unwrap(), id);
    /// ```
    pub fn from_card_id(id: &CardId) -> Result<Self> {
        let value: u128 = id.as_str().parse().map_err(|_| {
            HardwareError::invalid_data(format!("Card {id} does not fit in a UID"))
        })?;

        let bytes = value.to_le_bytes();
        let significant = bytes.iter().rposition(|b| *b != 0).map_or(0, |i| i + 1);
        Self::new(bytes[..significant.max(MIN_UID_LENGTH)].to_vec())
    }

    /// Get the UID as a hexadecimal string, in reader byte order.
    pub fn uid_hex(&self) -> String {
        self.uid.iter().map(|b| format!("{b:02X}")).collect()
    }

    /// Decode the UID into the terminal's decimal card identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the UID cannot be decoded.
    pub fn card_id(&self) -> Result<CardId> {
        CardId::from_uid(&self.uid).map_err(|e| HardwareError::invalid_data(e.to_string()))
    }
}

/// RFID reader device abstraction.
///
/// # Object Safety and Dynamic Dispatch
///
/// **NOTE**: This trait is NOT object-safe because `async fn` methods return
/// `impl Future`. Use generic type parameters instead of `Box<dyn RfidReader>`.
pub trait RfidReader: Send + Sync {
    /// Check the reader field once.
    ///
    /// Returns `Ok(None)` when no new card is present. Never blocks waiting
    /// for a card; callers poll at their own interval.
    ///
    /// # Errors
    ///
    /// Returns [`HardwareError::CardReadError`] for a transient read failure
    /// and any other variant when the reader is unusable.
    async fn poll_card(&mut self) -> Result<Option<CardData>>;

    /// Get reader information.
    async fn reader_info(&self) -> Result<ReaderInfo>;
}

/// Three-button input device.
pub trait ButtonPad: Send + Sync {
    /// Wait for the next button press.
    ///
    /// # Errors
    ///
    /// Returns an error if the device is disconnected.
    async fn next_press(&mut self) -> Result<Button>;
}

/// Two-line character display.
pub trait TextDisplay: Send + Sync {
    /// Replace the display contents with two lines of text.
    ///
    /// Implementations truncate lines wider than the display.
    async fn show(&mut self, line1: &str, line2: &str) -> Result<()>;

    /// Blank the display.
    async fn clear(&mut self) -> Result<()> {
        self.show("", "").await
    }
}

/// Grant/deny indicator.
pub trait StatusLed: Send + Sync {
    /// Set the indicator state.
    async fn set_led(&mut self, color: LedColor) -> Result<()>;
}

/// Local wall-clock time source.
///
/// Best effort: the clock may not be synchronized yet.
pub trait Clock: Send + Sync {
    /// Read the current local time.
    ///
    /// # Errors
    ///
    /// Returns [`HardwareError::ClockUnavailable`] if no valid time is known.
    async fn local_time(&mut self) -> Result<LocalTimestamp>;
}

/// Wi-Fi station interface.
///
/// `connect` only starts an association; callers poll [`is_connected`]
/// and [`ip_address`] until the link is up.
///
/// [`is_connected`]: WifiRadio::is_connected
/// [`ip_address`]: WifiRadio::ip_address
pub trait WifiRadio: Send + Sync {
    /// Power up the radio in station mode.
    async fn activate(&mut self) -> Result<()>;

    /// Start associating with a network.
    async fn connect(&mut self, ssid: &str, password: &str) -> Result<()>;

    /// Drop the current association.
    async fn disconnect(&mut self) -> Result<()>;

    /// Power the radio down.
    async fn deactivate(&mut self) -> Result<()>;

    /// Returns `true` while associated with a network.
    fn is_connected(&self) -> bool;

    /// Address assigned to the station, if any.
    fn ip_address(&self) -> Option<Ipv4Addr>;

    /// SSID of the current association.
    fn ssid(&self) -> Option<String>;

    /// Connected with a usable address (anything but `0.0.0.0`).
    fn has_valid_link(&self) -> bool {
        self.is_connected() && self.ip_address().is_some_and(|ip| !ip.is_unspecified())
    }
}

/// Line-oriented text console used for credential entry.
pub trait OperatorConsole: Send + Sync {
    /// Show `prompt` and wait for one line of input (without the newline).
    ///
    /// # Errors
    ///
    /// Returns an error if the console is closed.
    async fn prompt(&mut self, prompt: &str) -> Result<String>;

    /// Print an informational line.
    async fn notify(&mut self, message: &str) -> Result<()>;
}
