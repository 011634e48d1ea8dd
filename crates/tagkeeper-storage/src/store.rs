//! Typed persistence of the terminal's records.
//!
//! Every record lives in its own JSON file and is rewritten in full on each
//! save. Loading is forgiving: a missing file yields the default value, a
//! file that no longer parses is logged and treated as empty, and a single
//! bad entry in a list is skipped without losing the rest.

use crate::backend::FileStore;
use crate::error::StorageResult;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tagkeeper_core::constants::{ACCESS_LOG_FILE, WHITELIST_FILE, WIFI_CONFIG_FILE};
use tagkeeper_core::{CardId, EventLogEntry, LogEntry, RollingLog, WifiCredential, Whitelist};
use tracing::{debug, info, warn};

/// JSON-file persistence for whitelist, access log, Wi-Fi credential and
/// per-event attendance logs.
///
/// # Example
///
/// ```
/// use tagkeeper_core::{CardId, Whitelist};
/// use tagkeeper_storage::{MemoryStore, PersistenceStore};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = PersistenceStore::new(MemoryStore::new());
///
/// let mut whitelist = store.load_whitelist().await?;
/// assert!(whitelist.is_empty());
///
/// whitelist.insert(CardId::new("123")?);
/// store.save_whitelist(&whitelist).await?;
///
/// assert_eq!(store.load_whitelist().await?, whitelist);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PersistenceStore<F> {
    files: F,
}

impl<F: FileStore> PersistenceStore<F> {
    pub fn new(files: F) -> Self {
        Self { files }
    }

    /// The underlying file store.
    pub fn files(&self) -> &F {
        &self.files
    }

    pub async fn load_whitelist(&self) -> StorageResult<Whitelist> {
        let cards: Vec<CardId> = self.load_list(WHITELIST_FILE).await?;
        let whitelist = Whitelist::from(cards);
        info!(cards = whitelist.len(), "Loaded whitelist");
        Ok(whitelist)
    }

    pub async fn save_whitelist(&self, whitelist: &Whitelist) -> StorageResult<()> {
        self.save(WHITELIST_FILE, whitelist).await?;
        info!(cards = whitelist.len(), "Saved whitelist");
        Ok(())
    }

    /// Load the stored access log (at most the persisted tail).
    pub async fn load_log(&self) -> StorageResult<RollingLog> {
        let entries: Vec<LogEntry> = self.load_list(ACCESS_LOG_FILE).await?;
        let mut log = RollingLog::from_entries(entries);
        let tail = log.persisted().to_vec();
        if tail.len() < log.len() {
            log = RollingLog::from_entries(tail);
        }
        info!(entries = log.len(), "Loaded access log");
        Ok(log)
    }

    /// Save the most recent entries of the log; older ones are dropped.
    pub async fn save_log(&self, log: &RollingLog) -> StorageResult<()> {
        let tail = log.persisted();
        self.save(ACCESS_LOG_FILE, tail).await?;
        debug!(entries = tail.len(), "Saved access log");
        Ok(())
    }

    pub async fn load_credential(&self) -> StorageResult<WifiCredential> {
        let credential: WifiCredential = self.load_or_default(WIFI_CONFIG_FILE).await?;
        debug!(set = credential.is_set(), "Loaded Wi-Fi credential");
        Ok(credential)
    }

    pub async fn save_credential(&self, credential: &WifiCredential) -> StorageResult<()> {
        self.save(WIFI_CONFIG_FILE, credential).await?;
        info!(set = credential.is_set(), "Saved Wi-Fi credential");
        Ok(())
    }

    /// Create (or truncate) an attendance file holding an empty list.
    pub async fn create_event_log(&self, name: &str) -> StorageResult<()> {
        self.save::<[EventLogEntry]>(name, &[]).await?;
        info!(file = name, "Created event log");
        Ok(())
    }

    /// Read an attendance file.
    ///
    /// Never fails: a missing, unreadable or corrupt file reads as empty.
    pub async fn read_event_log(&self, name: &str) -> Vec<EventLogEntry> {
        match self.load_list(name).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(file = name, "Reading event log failed, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Replace the contents of an attendance file.
    pub async fn write_event_log(&self, name: &str, entries: &[EventLogEntry]) -> StorageResult<()> {
        self.save(name, entries).await
    }

    /// Append one record to an attendance file (read, append, rewrite).
    pub async fn append_event_entry(&self, name: &str, entry: EventLogEntry) -> StorageResult<()> {
        let mut entries = self.read_event_log(name).await;
        entries.push(entry);
        self.write_event_log(name, &entries).await?;
        debug!(file = name, entries = entries.len(), "Appended event entry");
        Ok(())
    }

    async fn load_or_default<T>(&self, name: &str) -> StorageResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let Some(bytes) = self.files.read(name).await? else {
            debug!(file = name, "File missing, using defaults");
            return Ok(T::default());
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!(file = name, "Corrupt file, using defaults: {}", e);
                Ok(T::default())
            }
        }
    }

    /// Load a JSON array, keeping every entry that parses as `T`.
    async fn load_list<T>(&self, name: &str) -> StorageResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let raw: Vec<Value> = self.load_or_default(name).await?;
        let items = raw
            .iter()
            .filter_map(|value| match <T as Deserialize>::deserialize(value) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!(file = name, entry = %value, "Skipping invalid entry: {}", e);
                    None
                }
            })
            .collect();
        Ok(items)
    }

    async fn save<T>(&self, name: &str, value: &T) -> StorageResult<()>
    where
        T: Serialize + ?Sized,
    {
        let bytes = serde_json::to_vec(value)?;
        self.files.write(name, &bytes).await
    }
}
