//! Access and attendance log records.

use crate::constants::MAX_PERSISTED_LOG_ENTRIES;
use crate::types::CardId;
use serde::{Deserialize, Serialize};

/// One granted access, as shown by the log viewer and stored on disk.
///
/// `time` is the formatted local time (`dd-mm-yy hh:mm`) or the
/// `"Unknown Time"` placeholder when the clock could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub time: String,
    pub card: CardId,
}

impl LogEntry {
    pub fn new(time: impl Into<String>, card: CardId) -> Self {
        Self {
            time: time.into(),
            card,
        }
    }
}

/// Append-only access log.
///
/// Entries accumulate in memory for the lifetime of the terminal; only the
/// most recent [`MAX_PERSISTED_LOG_ENTRIES`] are ever written to disk.
///
/// # Examples
///
/// ```
/// use tagkeeper_core::{CardId, LogEntry, RollingLog};
///
/// let mut log = RollingLog::new();
/// for i in 0..25 {
///     log.push(LogEntry::new("01-01-25 10:00", CardId::new(&i.to_string()).unwrap()));
/// }
///
/// assert_eq!(log.len(), 25);
/// assert_eq!(log.persisted().len(), 20);
/// assert_eq!(log.persisted()[0].card.as_str(), "5");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollingLog {
    entries: Vec<LogEntry>,
}

impl RollingLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the log from stored entries (oldest first).
    #[must_use]
    pub fn from_entries(entries: Vec<LogEntry>) -> Self {
        Self { entries }
    }

    /// Append an entry at the most recent end.
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// Entry at `index`, oldest first.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&LogEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// The tail that is written to disk: the most recent
    /// [`MAX_PERSISTED_LOG_ENTRIES`] entries, oldest first.
    #[must_use]
    pub fn persisted(&self) -> &[LogEntry] {
        let start = self.entries.len().saturating_sub(MAX_PERSISTED_LOG_ENTRIES);
        &self.entries[start..]
    }
}

/// One attendance record inside an event file.
///
/// Serialized with the field names used by existing event files:
/// `{"UID": ..., "Name": ..., "Time": ...}`. No caller fills `name` yet; it
/// is written as an empty string when absent and read back as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLogEntry {
    #[serde(rename = "UID")]
    pub uid: CardId,

    #[serde(rename = "Name", default, with = "blank_name")]
    pub name: Option<String>,

    #[serde(rename = "Time")]
    pub time: String,
}

impl EventLogEntry {
    pub fn new(uid: CardId, time: impl Into<String>) -> Self {
        Self {
            uid,
            name: None,
            time: time.into(),
        }
    }

    /// Attach a display name to the record.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = (!name.is_empty()).then_some(name);
        self
    }
}

mod blank_name {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(name: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(name.as_deref().unwrap_or_default())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = Option::<String>::deserialize(deserializer)?;
        Ok(name.filter(|n| !n.is_empty()))
    }
}
