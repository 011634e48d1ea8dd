//! Network connectivity for Tagkeeper
//!
//! This crate manages the terminal's Wi-Fi station link and the stored
//! credential that goes with it. The terminal works fully offline; the link
//! only serves time synchronization.
//!
//! # Components
//!
//! - **WifiCredentialManager**: connect/disconnect with credential recovery
//! - **RetryPolicy**: bounded link polling after a connect request
//!
//! # Example
//!
//! ```no_run
//! use tagkeeper_core::WifiCredential;
//! use tagkeeper_hardware::mock::{MockConsole, MockRadio};
//! use tagkeeper_network::WifiCredentialManager;
//! use tagkeeper_storage::{MemoryStore, PersistenceStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let (radio, _radio_handle) = MockRadio::new();
//! let (console, _console_handle) = MockConsole::new();
//! let store = PersistenceStore::new(MemoryStore::new());
//!
//! let mut credential = store.load_credential().await?;
//! let mut manager = WifiCredentialManager::new(radio, console);
//! let outcome = manager.connect(&mut credential, &store).await?;
//! println!("Wi-Fi: {outcome}");
//! # Ok(())
//! # }
//! ```

mod retry;
mod wifi;

pub use retry::RetryPolicy;
pub use wifi::{ConnectOutcome, Result, WifiCredentialManager, WifiError};
