//! Storage layer for the Tagkeeper access terminal.
//!
//! This crate persists the terminal's records as whole JSON files: the
//! whitelist, the rolling access log, the Wi-Fi credential and one
//! attendance file per event.
//!
//! # Architecture
//!
//! - [`FileStore`] - raw read/replace of named files
//! - [`DirectoryStore`] - files in a directory, replaced atomically by rename
//! - [`MemoryStore`] - shared in-memory files with failure injection
//! - [`PersistenceStore`] - typed load/save of every record on top of a [`FileStore`]
//!
//! # Recovery Rules
//!
//! - A missing file loads as the empty/default record.
//! - A file that does not parse loads as the default and is logged at `warn`.
//! - Attendance files are read without ever failing; only writes report errors.
//!
//! # Examples
//!
//! ```no_run
//! use tagkeeper_storage::{DirectoryStore, PersistenceStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = PersistenceStore::new(DirectoryStore::open("data").await?);
//!
//! let whitelist = store.load_whitelist().await?;
//! let log = store.load_log().await?;
//! println!("{} cards, {} log entries", whitelist.len(), log.len());
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod error;
pub mod store;

pub use backend::{DirectoryStore, FileStore, MemoryStore};
pub use error::{StorageError, StorageResult};
pub use store::PersistenceStore;
