//! Integration tests for directory-backed persistence
//!
//! These tests run the typed store against a real temporary directory and
//! check the on-disk files a deployed terminal would read back.
//!
//! Run with: cargo test --package tagkeeper-storage --test directory_store

use tagkeeper_core::constants::{ACCESS_LOG_FILE, WHITELIST_FILE, WIFI_CONFIG_FILE};
use tagkeeper_core::{CardId, EventLogEntry, LogEntry, RollingLog, Whitelist, WifiCredential};
use tagkeeper_storage::{DirectoryStore, PersistenceStore};
use tempfile::TempDir;

fn card(id: &str) -> CardId {
    CardId::new(id).unwrap()
}

async fn open(dir: &TempDir) -> PersistenceStore<DirectoryStore> {
    PersistenceStore::new(DirectoryStore::open(dir.path()).await.unwrap())
}

#[tokio::test]
async fn test_fresh_directory_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let store = open(&dir).await;

    assert!(store.load_whitelist().await.unwrap().is_empty());
    assert!(store.load_log().await.unwrap().is_empty());
    assert!(!store.load_credential().await.unwrap().is_set());
    assert!(!dir.path().join(WHITELIST_FILE).exists());
}

#[tokio::test]
async fn test_records_survive_reopen() {
    let dir = TempDir::new().unwrap();

    {
        let store = open(&dir).await;
        store
            .save_whitelist(&Whitelist::from(vec![card("123")]))
            .await
            .unwrap();

        let mut log = RollingLog::new();
        log.push(LogEntry::new("10-05-25 12:46", card("123")));
        store.save_log(&log).await.unwrap();

        store
            .save_credential(&WifiCredential::new("office", "secret").unwrap())
            .await
            .unwrap();
    }

    let store = open(&dir).await;
    assert!(store.load_whitelist().await.unwrap().contains(&card("123")));
    assert_eq!(store.load_log().await.unwrap().len(), 1);
    assert_eq!(store.load_credential().await.unwrap().ssid(), "office");

    for name in [WHITELIST_FILE, ACCESS_LOG_FILE, WIFI_CONFIG_FILE] {
        assert!(dir.path().join(name).is_file(), "{name} missing");
    }
}

#[tokio::test]
async fn test_event_file_on_disk() {
    let dir = TempDir::new().unwrap();
    let store = open(&dir).await;
    let name = "E_250510_1246.json";

    store.create_event_log(name).await.unwrap();
    store
        .append_event_entry(name, EventLogEntry::new(card("111"), "10-05-25 12:50"))
        .await
        .unwrap();

    let raw = std::fs::read_to_string(dir.path().join(name)).unwrap();
    assert_eq!(raw, r#"[{"UID":"111","Name":"","Time":"10-05-25 12:50"}]"#);
}

#[tokio::test]
async fn test_hand_edited_whitelist_with_duplicates() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(WHITELIST_FILE), r#"["1", "2", "1"]"#).unwrap();

    let store = open(&dir).await;
    let whitelist = store.load_whitelist().await.unwrap();

    assert_eq!(whitelist.len(), 2);
}
