//! Wi-Fi credential management.
//!
//! Connecting follows a fixed ladder: keep a link that is already valid, else
//! try the stored credential within the retry budget, else wipe it and ask
//! the operator for a new one until a connection succeeds.
//!
//! # Architecture
//!
//! ```text
//! AdminMenu ──> WifiCredentialManager ──> WifiRadio        (association)
//!                     │            └────> OperatorConsole  (SSID/password prompts)
//!                     └──> PersistenceStore                (wifi_config.json)
//! ```

use crate::retry::RetryPolicy;
use std::fmt;
use tagkeeper_core::WifiCredential;
use tagkeeper_hardware::{HardwareError, OperatorConsole, WifiRadio};
use tagkeeper_storage::{FileStore, PersistenceStore, StorageError};
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Errors that can occur while managing the Wi-Fi link
#[derive(Debug, Error)]
pub enum WifiError {
    /// Radio or console failure
    #[error("Hardware error: {0}")]
    Hardware(#[from] HardwareError),

    /// Credential could not be persisted
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for Wi-Fi operations
pub type Result<T> = std::result::Result<T, WifiError>;

/// How [`WifiCredentialManager::connect`] ended up connected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// A valid link existed; nothing was changed.
    AlreadyConnected { ssid: Option<String> },

    /// The stored credential connected.
    Restored { ssid: String },

    /// The operator entered a new credential, which is now stored.
    Configured { ssid: String },
}

impl fmt::Display for ConnectOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyConnected { ssid } => {
                write!(f, "already connected to {}", ssid.as_deref().unwrap_or("?"))
            }
            Self::Restored { ssid } => write!(f, "restored {ssid}"),
            Self::Configured { ssid } => write!(f, "configured {ssid}"),
        }
    }
}

/// Connects, disconnects and reports the station link, keeping the stored
/// credential in step with it.
#[derive(Debug)]
pub struct WifiCredentialManager<R, C> {
    radio: R,
    console: C,
    retry: RetryPolicy,
}

impl<R: WifiRadio, C: OperatorConsole> WifiCredentialManager<R, C> {
    pub fn new(radio: R, console: C) -> Self {
        Self {
            radio,
            console,
            retry: RetryPolicy::default(),
        }
    }

    /// Set the link polling budget used after each connect request.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn radio(&self) -> &R {
        &self.radio
    }

    /// Associated with a network (address not checked).
    pub fn is_connected(&self) -> bool {
        self.radio.is_connected()
    }

    /// One-line connectivity summary.
    pub fn status_line(&self, credential: &WifiCredential) -> String {
        if self.radio.is_connected() {
            let ssid = self
                .radio
                .ssid()
                .unwrap_or_else(|| credential.ssid().to_string());
            format!("Connected to Wi-Fi: {ssid}")
        } else {
            "No Wi-Fi connected.".to_string()
        }
    }

    /// Power the radio up and print the connectivity summary.
    pub async fn report_status(&mut self, credential: &WifiCredential) -> Result<()> {
        self.radio.activate().await?;
        let line = self.status_line(credential);
        info!("{}", line);
        self.console.notify(&line).await?;
        Ok(())
    }

    /// Bring the link up.
    ///
    /// # Errors
    ///
    /// Returns an error if the radio or console fails. A wrong credential is
    /// not an error: the operator is prompted again. A credential that cannot
    /// be saved is logged and the flow carries on.
    pub async fn connect<F: FileStore>(
        &mut self,
        credential: &mut WifiCredential,
        store: &PersistenceStore<F>,
    ) -> Result<ConnectOutcome> {
        self.radio.activate().await?;

        if self.radio.has_valid_link() {
            let ssid = self.radio.ssid();
            self.console
                .notify(&format!(
                    "Already connected to Wi-Fi: {}",
                    ssid.as_deref().unwrap_or_default()
                ))
                .await?;
            return Ok(ConnectOutcome::AlreadyConnected { ssid });
        }

        if credential.is_set() {
            let ssid = credential.ssid().to_string();
            info!(ssid = %ssid, "Connecting with stored credential");
            self.console
                .notify(&format!("Trying to connect to saved network: {ssid}"))
                .await?;

            if self.try_connect(credential).await? {
                self.announce_link().await?;
                return Ok(ConnectOutcome::Restored { ssid });
            }

            warn!(ssid = %ssid, "Stored credential failed, clearing it");
            self.console
                .notify("Connection failed! Resetting Wi-Fi credentials.")
                .await?;
            credential.clear();
            persist(store, credential).await;
        }

        loop {
            let ssid = self.console.prompt("Enter Wi-Fi SSID: ").await?;
            let password = self.console.prompt("Enter Wi-Fi Password: ").await?;

            let candidate = match WifiCredential::new(ssid.trim(), &password) {
                Ok(candidate) if candidate.is_set() => candidate,
                _ => {
                    self.console
                        .notify("SSID and password are required.")
                        .await?;
                    continue;
                }
            };

            if self.try_connect(&candidate).await? {
                *credential = candidate;
                persist(store, credential).await;
                self.announce_link().await?;
                info!(ssid = credential.ssid(), "Wi-Fi configured");
                return Ok(ConnectOutcome::Configured {
                    ssid: credential.ssid().to_string(),
                });
            }

            debug!(ssid = candidate.ssid(), "Entered credential failed");
            self.console.notify("Connection failed! Try again.").await?;
        }
    }

    /// Tear the link down and forget the stored credential.
    pub async fn disconnect<F: FileStore>(
        &mut self,
        credential: &mut WifiCredential,
        store: &PersistenceStore<F>,
    ) -> Result<()> {
        self.radio.disconnect().await?;
        self.radio.deactivate().await?;
        credential.clear();
        store.save_credential(credential).await?;
        info!("Wi-Fi disconnected");
        self.console.notify("Disconnected from Wi-Fi.").await?;
        Ok(())
    }

    async fn try_connect(&mut self, credential: &WifiCredential) -> Result<bool> {
        self.radio
            .connect(credential.ssid(), credential.password())
            .await?;
        let radio = &self.radio;
        Ok(self.retry.poll_until(|| radio.has_valid_link()).await)
    }

    async fn announce_link(&mut self) -> Result<()> {
        let address = self
            .radio
            .ip_address()
            .map(|ip| ip.to_string())
            .unwrap_or_default();
        self.console
            .notify(&format!("Connected to Wi-Fi: {address}"))
            .await?;
        Ok(())
    }
}

async fn persist<F: FileStore>(store: &PersistenceStore<F>, credential: &WifiCredential) {
    if let Err(e) = store.save_credential(credential).await {
        error!(set = credential.is_set(), "Saving Wi-Fi credential failed: {}", e);
    }
}
