//! Common types shared across peripheral implementations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// RFID reader information.
///
/// Contains reader-specific metadata such as supported protocols.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderInfo {
    /// Reader name (e.g., "RC522").
    pub name: String,

    /// List of supported protocols (e.g., ["ISO14443A"]).
    pub protocols: Vec<String>,
}

impl ReaderInfo {
    /// Create a new ReaderInfo.
    pub fn new(name: impl Into<String>, protocols: Vec<String>) -> Self {
        Self {
            name: name.into(),
            protocols,
        }
    }
}

/// States of the grant/deny indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedColor {
    /// Both indicators off.
    Off,

    /// Deny indicator.
    Red,

    /// Grant indicator.
    Green,
}

/// The three physical buttons of the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    Up,
    Down,
    Enter,
}

impl Button {
    /// Parse a host command word (`up`, `down`, `enter`).
    pub fn from_command(word: &str) -> Option<Self> {
        match word.trim().to_ascii_lowercase().as_str() {
            "up" | "u" => Some(Self::Up),
            "down" | "d" => Some(Self::Down),
            "enter" | "e" => Some(Self::Enter),
            _ => None,
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "Up"),
            Self::Down => write!(f, "Down"),
            Self::Enter => write!(f, "Enter"),
        }
    }
}
