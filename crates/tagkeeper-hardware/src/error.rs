//! Error types for peripheral operations.
//!
//! Covers the failure modes of the terminal's peripherals, from a device
//! that went away to a clock that has no valid time yet.

/// Result type alias for peripheral operations.
pub type Result<T> = std::result::Result<T, HardwareError>;

/// Errors that can occur during peripheral operations.
#[derive(Debug, thiserror::Error)]
pub enum HardwareError {
    /// Device is not connected or has been disconnected.
    #[error("Device disconnected: {device}")]
    Disconnected { device: String },

    /// Device communication error.
    #[error("Communication error: {message}")]
    CommunicationError { message: String },

    /// Invalid data received from device.
    #[error("Invalid data: {message}")]
    InvalidData { message: String },

    /// Device configuration error.
    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    /// Transient card reading error. The reader stays usable.
    #[error("Card read error: {message}")]
    CardReadError { message: String },

    /// The clock has no valid local time.
    #[error("Clock unavailable: {message}")]
    ClockUnavailable { message: String },
}

impl HardwareError {
    /// Create a new disconnected error.
    pub fn disconnected(device: impl Into<String>) -> Self {
        Self::Disconnected {
            device: device.into(),
        }
    }

    /// Create a new communication error.
    pub fn communication(message: impl Into<String>) -> Self {
        Self::CommunicationError {
            message: message.into(),
        }
    }

    /// Create a new invalid data error.
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }

    /// Create a new configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// Create a new card read error.
    pub fn card_read(message: impl Into<String>) -> Self {
        Self::CardReadError {
            message: message.into(),
        }
    }

    /// Create a new clock unavailable error.
    pub fn clock_unavailable(message: impl Into<String>) -> Self {
        Self::ClockUnavailable {
            message: message.into(),
        }
    }

    /// Returns `true` for errors after which the device can be polled again.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::CardReadError { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disconnected_error() {
        let error = HardwareError::disconnected("RC522");
        assert!(matches!(error, HardwareError::Disconnected { .. }));
        assert_eq!(error.to_string(), "Device disconnected: RC522");
        assert!(!error.is_transient());
    }

    #[test]
    fn test_card_read_error_is_transient() {
        let error = HardwareError::card_read("CRC mismatch");
        assert_eq!(error.to_string(), "Card read error: CRC mismatch");
        assert!(error.is_transient());
    }

    #[test]
    fn test_clock_unavailable_error() {
        let error = HardwareError::clock_unavailable("not synchronized");
        assert_eq!(error.to_string(), "Clock unavailable: not synchronized");
        assert!(!error.is_transient());
    }
}
