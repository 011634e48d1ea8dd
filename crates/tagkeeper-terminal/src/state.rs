//! Mutable terminal state.

use crate::events::EventSession;
use tagkeeper_core::{AccessDecision, AdminSet, CardId, RollingLog, WifiCredential, Whitelist};
use tagkeeper_storage::{FileStore, PersistenceStore, StorageResult};
use tracing::error;

/// Everything the controllers read and change, owned by the terminal and
/// lent to one controller at a time.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub admins: AdminSet,
    pub whitelist: Whitelist,
    pub log: RollingLog,
    pub credential: WifiCredential,
    pub event: EventSession,
}

impl AppState {
    /// Fresh state with no stored records.
    pub fn new(admins: AdminSet) -> Self {
        Self {
            admins,
            ..Default::default()
        }
    }

    /// Load the stored records.
    ///
    /// A record that is missing, corrupt or unreadable starts out empty, so
    /// the terminal always comes up.
    pub async fn load<F: FileStore>(admins: AdminSet, store: &PersistenceStore<F>) -> Self {
        Self {
            admins,
            whitelist: or_empty("whitelist", store.load_whitelist().await),
            log: or_empty("access log", store.load_log().await),
            credential: or_empty("Wi-Fi credential", store.load_credential().await),
            event: EventSession::new(),
        }
    }

    pub fn decide(&self, card: &CardId) -> AccessDecision {
        AccessDecision::decide(card, &self.admins, &self.whitelist)
    }
}

fn or_empty<T: Default>(record: &str, loaded: StorageResult<T>) -> T {
    loaded.unwrap_or_else(|e| {
        error!(record, "Reading stored record failed, starting empty: {}", e);
        T::default()
    })
}
