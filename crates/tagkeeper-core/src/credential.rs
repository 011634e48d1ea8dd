//! Stored Wi-Fi credential.

use crate::{Result, error::Error};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wi-Fi network credential.
///
/// A credential is either *unset* (both fields empty) or *set* (both fields
/// non-empty). A stored file holding only one of the two is read as unset.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawCredential")]
pub struct WifiCredential {
    ssid: String,
    password: String,
}

#[derive(Deserialize)]
struct RawCredential {
    #[serde(default)]
    ssid: String,
    #[serde(default)]
    password: String,
}

impl From<RawCredential> for WifiCredential {
    fn from(raw: RawCredential) -> Self {
        WifiCredential::new(&raw.ssid, &raw.password).unwrap_or_default()
    }
}

impl WifiCredential {
    /// Create a set credential.
    ///
    /// # Errors
    /// Returns `Error::InvalidCredential` if exactly one of the fields is
    /// empty. Passing two empty fields yields the unset credential.
    pub fn new(ssid: &str, password: &str) -> Result<Self> {
        match (ssid.is_empty(), password.is_empty()) {
            (true, true) => Ok(Self::unset()),
            (false, false) => Ok(Self {
                ssid: ssid.to_string(),
                password: password.to_string(),
            }),
            (true, false) => Err(Error::InvalidCredential("SSID is empty".to_string())),
            (false, true) => Err(Error::InvalidCredential("password is empty".to_string())),
        }
    }

    /// The unset credential.
    #[must_use]
    pub fn unset() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_set(&self) -> bool {
        !self.ssid.is_empty()
    }

    #[must_use]
    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Reset to unset.
    pub fn clear(&mut self) {
        *self = Self::unset();
    }
}

// Keeps the password out of logs.
impl fmt::Debug for WifiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WifiCredential")
            .field("ssid", &self.ssid)
            .field("password", &if self.password.is_empty() { "" } else { "***" })
            .finish()
    }
}
