//! Core constants for the access terminal.
//!
//! This module defines the fixed values shared by every crate of the
//! workspace: display geometry, persistence file names, timing defaults and
//! the compiled-in set of privileged cards.
//!
//! # Usage
//!
//! Constants are organized by category for easy discovery:
//!
//! ```
//! use tagkeeper_core::constants::*;
//! use std::time::Duration;
//!
//! assert_eq!(DISPLAY_COLUMNS, 16);
//! assert_eq!(MAX_PERSISTED_LOG_ENTRIES, 20);
//!
//! let timeout = Duration::from_millis(DEFAULT_MENU_IDLE_TIMEOUT_MS);
//! assert_eq!(timeout.as_secs(), 5);
//! ```
//!
//! # Compatibility
//!
//! File names and formats match the ones already written by deployed
//! terminals. Changing them orphans the data stored on existing devices.

// ============================================================================
// Display Geometry
// ============================================================================

/// Number of text lines on the character display.
pub const DISPLAY_LINES: usize = 2;

/// Number of characters per display line.
///
/// Longer messages are truncated, never wrapped.
pub const DISPLAY_COLUMNS: usize = 16;

// ============================================================================
// Access Control
// ============================================================================

/// Privileged card identifiers compiled into the firmware.
///
/// A scan of one of these cards grants access and opens the admin menu.
/// The set is not persisted and cannot be changed at runtime.
pub const ADMIN_CARDS: [&str; 2] = ["2415040701", "2854236190"];

/// Maximum UID length in bytes accepted for decimal decoding.
///
/// ISO 14443 UIDs are at most 10 bytes; 16 bytes is the widest value that
/// still fits an unsigned 128-bit integer.
pub const MAX_UID_LENGTH: usize = 16;

/// Longest decimal card identifier (digits of `u128::MAX`).
pub const MAX_CARD_ID_LENGTH: usize = 39;

// ============================================================================
// Persistence
// ============================================================================

/// File holding the whitelist (JSON array of card identifiers).
pub const WHITELIST_FILE: &str = "rfid_data.json";

/// File holding the rolling access log (JSON array of `{time, card}`).
pub const ACCESS_LOG_FILE: &str = "rfid_log.json";

/// File holding the stored Wi-Fi credential (JSON object `{ssid, password}`).
pub const WIFI_CONFIG_FILE: &str = "wifi_config.json";

/// Number of access log entries kept on disk.
///
/// Older entries are dropped silently every time the log is saved.
pub const MAX_PERSISTED_LOG_ENTRIES: usize = 20;

/// Prefix of per-event attendance files.
///
/// Full pattern: `E_{yy}{mm}{dd}_{hh}{mm}.json`.
pub const EVENT_FILE_PREFIX: &str = "E_";

/// Extension of every persisted JSON file.
pub const JSON_EXTENSION: &str = ".json";

// ============================================================================
// Time
// ============================================================================

/// Text stored in place of a timestamp when the clock cannot be read.
pub const UNKNOWN_TIME: &str = "Unknown Time";

/// `chrono` format of log timestamps: `dd-mm-yy hh:mm`.
pub const LOG_TIME_FORMAT: &str = "%d-%m-%y %H:%M";

/// Default offset of local time from UTC, in seconds (UTC+05:30).
pub const DEFAULT_UTC_OFFSET_SECS: i32 = 19_800;

// ============================================================================
// Timing Defaults
// ============================================================================

/// Inactivity window after which a menu closes itself (milliseconds).
pub const DEFAULT_MENU_IDLE_TIMEOUT_MS: u64 = 5_000;

/// Delay applied after every accepted button press (milliseconds).
///
/// Suppresses duplicate triggers from contact bounce.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Interval between two card reader polls (milliseconds).
pub const DEFAULT_CARD_POLL_INTERVAL_MS: u64 = 200;

/// Duration of the grant/deny indicator pulse (milliseconds).
pub const DEFAULT_INDICATOR_PULSE_MS: u64 = 500;

/// How long informational messages stay on screen (milliseconds).
pub const DEFAULT_MESSAGE_HOLD_MS: u64 = 1_000;

/// Number of link checks made after a Wi-Fi connect request.
pub const DEFAULT_WIFI_RETRY_ATTEMPTS: u32 = 10;

/// Interval between two Wi-Fi link checks (milliseconds).
pub const DEFAULT_WIFI_POLL_INTERVAL_MS: u64 = 1_000;
