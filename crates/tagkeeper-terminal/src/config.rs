//! Terminal configuration.
//!
//! Every value has a default matching the deployed firmware, so an empty (or
//! absent) configuration file yields a working terminal. Values are read
//! from a TOML file whose path is taken from `TAGKEEPER_CONFIG`:
//!
//! ```toml
//! data_dir = "/var/lib/tagkeeper"
//! utc_offset_secs = 19800
//! menu_idle_timeout_ms = 5000
//!
//! [[networks]]
//! ssid = "office"
//! password = "secret"
//! ```

use crate::error::{Result, TerminalError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tagkeeper_core::constants::{
    ADMIN_CARDS, DEFAULT_CARD_POLL_INTERVAL_MS, DEFAULT_DEBOUNCE_MS, DEFAULT_INDICATOR_PULSE_MS,
    DEFAULT_MENU_IDLE_TIMEOUT_MS, DEFAULT_MESSAGE_HOLD_MS, DEFAULT_UTC_OFFSET_SECS,
    DEFAULT_WIFI_POLL_INTERVAL_MS, DEFAULT_WIFI_RETRY_ATTEMPTS,
};
use tagkeeper_core::{AdminSet, CardId};
use tagkeeper_network::RetryPolicy;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "TAGKEEPER_CONFIG";

/// Largest accepted UTC offset (exclusive), in seconds.
const MAX_UTC_OFFSET_SECS: i32 = 86_400;

/// Terminal configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Directory holding the JSON record files.
    pub data_dir: PathBuf,

    /// Offset of local time from UTC, in seconds.
    pub utc_offset_secs: i32,

    /// Privileged card identifiers.
    pub admin_cards: Vec<String>,

    /// Menu inactivity window (milliseconds).
    pub menu_idle_timeout_ms: u64,

    /// Delay after each accepted button press (milliseconds).
    pub debounce_ms: u64,

    /// Card reader poll interval (milliseconds).
    pub card_poll_interval_ms: u64,

    /// Grant/deny indicator pulse (milliseconds).
    pub indicator_pulse_ms: u64,

    /// How long informational messages stay on screen (milliseconds).
    pub message_hold_ms: u64,

    /// Link checks after a Wi-Fi connect request.
    pub wifi_retry_attempts: u32,

    /// Interval between link checks (milliseconds).
    pub wifi_poll_interval_ms: u64,

    /// Networks reachable by the simulated radio of a host build.
    pub networks: Vec<NetworkConfig>,
}

/// A network the simulated radio can join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub ssid: String,
    pub password: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            utc_offset_secs: DEFAULT_UTC_OFFSET_SECS,
            admin_cards: ADMIN_CARDS.iter().map(ToString::to_string).collect(),
            menu_idle_timeout_ms: DEFAULT_MENU_IDLE_TIMEOUT_MS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            card_poll_interval_ms: DEFAULT_CARD_POLL_INTERVAL_MS,
            indicator_pulse_ms: DEFAULT_INDICATOR_PULSE_MS,
            message_hold_ms: DEFAULT_MESSAGE_HOLD_MS,
            wifi_retry_attempts: DEFAULT_WIFI_RETRY_ATTEMPTS,
            wifi_poll_interval_ms: DEFAULT_WIFI_POLL_INTERVAL_MS,
            networks: Vec::new(),
        }
    }
}

impl TerminalConfig {
    /// Create a configuration storing its records under `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Default::default()
        }
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not parse or holds an invalid
    /// value.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load the file named by `TAGKEEPER_CONFIG`, or the defaults when the
    /// variable is not set.
    ///
    /// # Errors
    ///
    /// Returns an error if the named file cannot be read or is invalid.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(PathBuf::from(path)),
            None => Ok(Self::default()),
        }
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns `TerminalError::Config` describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        if self.utc_offset_secs.abs() >= MAX_UTC_OFFSET_SECS {
            return Err(TerminalError::Config(format!(
                "utc_offset_secs must be within +/-{MAX_UTC_OFFSET_SECS}, got {}",
                self.utc_offset_secs
            )));
        }
        if self.menu_idle_timeout_ms == 0 {
            return Err(TerminalError::Config(
                "menu_idle_timeout_ms must be positive".to_string(),
            ));
        }
        if self.card_poll_interval_ms == 0 {
            return Err(TerminalError::Config(
                "card_poll_interval_ms must be positive".to_string(),
            ));
        }
        if self.wifi_retry_attempts == 0 {
            return Err(TerminalError::Config(
                "wifi_retry_attempts must be positive".to_string(),
            ));
        }
        self.admin_set()?;
        Ok(())
    }

    /// Set the data directory
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set the UTC offset of local time
    pub fn utc_offset_secs(mut self, secs: i32) -> Self {
        self.utc_offset_secs = secs;
        self
    }

    /// Replace the privileged cards
    pub fn admin_cards<I, S>(mut self, cards: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.admin_cards = cards.into_iter().map(Into::into).collect();
        self
    }

    /// Set the menu inactivity window
    pub fn menu_idle_timeout(mut self, timeout: Duration) -> Self {
        self.menu_idle_timeout_ms = millis(timeout);
        self
    }

    /// Set the button debounce delay
    pub fn debounce(mut self, debounce: Duration) -> Self {
        self.debounce_ms = millis(debounce);
        self
    }

    /// Add a network for the simulated radio
    pub fn network(mut self, ssid: impl Into<String>, password: impl Into<String>) -> Self {
        self.networks.push(NetworkConfig {
            ssid: ssid.into(),
            password: password.into(),
        });
        self
    }

    /// The privileged cards as an [`AdminSet`].
    ///
    /// # Errors
    ///
    /// Returns `TerminalError::Config` if an entry is not a decimal card
    /// identifier.
    pub fn admin_set(&self) -> Result<AdminSet> {
        let cards = self
            .admin_cards
            .iter()
            .map(|card| {
                CardId::new(card)
                    .map_err(|e| TerminalError::Config(format!("admin card {card:?}: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(AdminSet::new(cards))
    }

    /// The timing values as durations.
    pub fn timings(&self) -> Timings {
        Timings {
            menu_idle_timeout: Duration::from_millis(self.menu_idle_timeout_ms),
            debounce: Duration::from_millis(self.debounce_ms),
            card_poll_interval: Duration::from_millis(self.card_poll_interval_ms),
            indicator_pulse: Duration::from_millis(self.indicator_pulse_ms),
            message_hold: Duration::from_millis(self.message_hold_ms),
        }
    }

    /// Link polling budget for the Wi-Fi manager.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.wifi_retry_attempts,
            Duration::from_millis(self.wifi_poll_interval_ms),
        )
    }
}

/// Timing values used by the controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub menu_idle_timeout: Duration,
    pub debounce: Duration,
    pub card_poll_interval: Duration,
    pub indicator_pulse: Duration,
    pub message_hold: Duration,
}

impl Timings {
    /// How long the connected network name stays on screen before the
    /// admin menu disconnects.
    pub fn wifi_status_hold(&self) -> Duration {
        self.message_hold * 2
    }
}

impl Default for Timings {
    fn default() -> Self {
        TerminalConfig::default().timings()
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
