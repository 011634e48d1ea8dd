//! Terminal error types.

use tagkeeper_hardware::HardwareError;
use tagkeeper_network::WifiError;
use tagkeeper_storage::StorageError;
use thiserror::Error;

/// Errors that stop the terminal.
///
/// Failures the operator can recover from (a record that could not be saved,
/// a Wi-Fi setup that went wrong) are shown on the display instead and never
/// surface here.
#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("Hardware error: {0}")]
    Hardware(#[from] HardwareError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Wi-Fi error: {0}")]
    Wifi(#[from] WifiError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TerminalError>;
