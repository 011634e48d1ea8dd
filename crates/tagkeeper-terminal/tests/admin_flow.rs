//! Integration tests for the admin menu and its sub-controllers.

mod common;

use common::{Harness, seed_log, seed_whitelist, stored_whitelist};
use tagkeeper_core::constants::{WHITELIST_FILE, WIFI_CONFIG_FILE};
use tagkeeper_hardware::Button::{Down, Enter, Up};
use tagkeeper_storage::MemoryStore;
use tagkeeper_terminal::{AdminOption, MenuOutcome};

#[tokio::test(start_paused = true)]
async fn test_idle_timeout_changes_nothing() {
    let files = MemoryStore::new();
    seed_whitelist(&files, &["123"]);
    files.insert(WIFI_CONFIG_FILE, r#"{"ssid":"office","password":"secret"}"#);
    let whitelist_before = files.get(WHITELIST_FILE);
    let credential_before = files.get(WIFI_CONFIG_FILE);
    let mut h = Harness::with_files(files).await;

    let outcome = h.scan("999").await;

    assert_eq!(outcome.menu, Some(MenuOutcome::TimedOut));
    assert!(h.display.has_shown("Timeout!"));
    assert_eq!(h.files.get(WHITELIST_FILE), whitelist_before);
    assert_eq!(h.files.get(WIFI_CONFIG_FILE), credential_before);
    assert!(!h.terminal.state().event.is_active());
    assert!(h.files.names().iter().all(|name| !name.starts_with("E_")));
    assert!(h.radio.attempts().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_return_leaves_without_dispatch() {
    let mut h = Harness::open().await;

    h.present("999").await;
    h.press(&[Up, Enter]).await;
    let outcome = h.run_scan().await;

    assert_eq!(outcome.menu, Some(MenuOutcome::Selected(AdminOption::Return)));
    assert!(h.display.has_shown("to scan mode"));
    assert_eq!(h.buttons.pending(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_whitelist_toggle_is_idempotent() {
    let files = MemoryStore::new();
    seed_whitelist(&files, &["123"]);
    let mut h = Harness::with_files(files).await;

    // Write Mode is the first option: add 777.
    h.present("999").await;
    h.present("777").await;
    h.press(&[Enter]).await;
    let outcome = h.run_scan().await;
    assert_eq!(
        outcome.menu,
        Some(MenuOutcome::Selected(AdminOption::WriteMode))
    );
    assert_eq!(stored_whitelist(&h.files), vec!["123", "777"]);
    assert!(h.display.has_shown("Card added:"));

    // Scan 777 again and confirm the deletion.
    h.present("999").await;
    h.present("777").await;
    h.press(&[Enter, Enter]).await;
    h.run_scan().await;

    assert_eq!(stored_whitelist(&h.files), vec!["123"]);
    assert!(h.display.has_shown("Card deleted:"));
    assert!(h.display.has_shown("Enter=Delete"));
}

#[tokio::test(start_paused = true)]
async fn test_deletion_cancelled_by_other_button() {
    let files = MemoryStore::new();
    seed_whitelist(&files, &["123"]);
    let before = files.get(WHITELIST_FILE);
    let mut h = Harness::with_files(files).await;

    h.present("999").await;
    h.present("123").await;
    h.press(&[Enter, Down]).await;
    h.run_scan().await;

    assert!(h.display.has_shown("canceled"));
    assert!(h.terminal.state().whitelist.contains(&common::card("123")));
    assert_eq!(h.files.get(WHITELIST_FILE), before);
}

#[tokio::test(start_paused = true)]
async fn test_menu_position_kept_across_visits() {
    let mut h = Harness::open().await;

    h.present("999").await;
    h.press(&[Down, Down, Down, Down, Enter]).await;
    let first = h.run_scan().await;
    assert_eq!(first.menu, Some(MenuOutcome::Selected(AdminOption::Return)));

    h.present("999").await;
    h.press(&[Enter]).await;
    let second = h.run_scan().await;
    assert_eq!(second.menu, Some(MenuOutcome::Selected(AdminOption::Return)));
}

#[tokio::test(start_paused = true)]
async fn test_log_viewer_browses_without_wraparound() {
    let files = MemoryStore::new();
    seed_log(&files, &["1", "2", "3"]);
    let mut h = Harness::with_files(files).await;

    // The admin scan itself becomes the most recent entry.
    h.present("999").await;
    h.press(&[Down, Enter, Up, Up, Up, Up, Down, Enter]).await;
    let outcome = h.run_scan().await;
    assert_eq!(
        outcome.menu,
        Some(MenuOutcome::Selected(AdminOption::ViewLogs))
    );

    let shown: Vec<String> = h
        .display
        .history()
        .into_iter()
        .filter(|frame| frame.line1.contains("-05-25 "))
        .map(|frame| frame.line2)
        .collect();
    assert_eq!(shown, vec!["999", "3", "2", "1", "2"]);
    assert_eq!(h.buttons.pending(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_log_viewer_empty_waits_for_enter() {
    let mut h = Harness::open().await;

    h.press(&[Down, Up, Enter]).await;
    h.terminal.view_logs().await.unwrap();

    assert_eq!(h.display.get_all_lines(), vec!["No logs", "Press Enter"]);
    assert_eq!(h.buttons.pending(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_wifi_setup_connects_and_disconnects() {
    let mut h = Harness::open().await;
    h.radio.add_network("office", "secret");
    h.console.type_line("office").await.unwrap();
    h.console.type_line("secret").await.unwrap();

    h.present("999").await;
    h.press(&[Down, Down, Enter]).await;
    let outcome = h.run_scan().await;

    assert_eq!(
        outcome.menu,
        Some(MenuOutcome::Selected(AdminOption::WifiSetup))
    );
    assert!(h.radio.is_connected());
    assert_eq!(h.terminal.state().credential.ssid(), "office");
    assert_eq!(
        h.files.get_string(WIFI_CONFIG_FILE).unwrap(),
        r#"{"ssid":"office","password":"secret"}"#
    );
    assert!(h.display.has_shown("See console"));
    assert!(h.display.has_shown("Connected"));

    // Same option again: the link is up, so it is torn down.
    h.present("999").await;
    h.press(&[Enter]).await;
    h.run_scan().await;

    assert!(!h.radio.is_connected());
    assert!(!h.terminal.state().credential.is_set());
    assert_eq!(
        h.files.get_string(WIFI_CONFIG_FILE).unwrap(),
        r#"{"ssid":"","password":""}"#
    );
    let status = h
        .display
        .history()
        .into_iter()
        .find(|frame| frame.line1 == "Wi-Fi:")
        .unwrap();
    assert_eq!(status.line2, "office");
    assert!(h.display.has_shown("Disconnected"));
}

#[tokio::test(start_paused = true)]
async fn test_wifi_setup_replaces_failing_credential() {
    let files = MemoryStore::new();
    files.insert(WIFI_CONFIG_FILE, r#"{"ssid":"old","password":"stale"}"#);
    let mut h = Harness::with_files(files).await;
    h.radio.add_network("office", "secret");
    h.console.type_line("office").await.unwrap();
    h.console.type_line("secret").await.unwrap();

    h.present("999").await;
    h.press(&[Down, Down, Enter]).await;
    h.run_scan().await;

    assert_eq!(h.radio.attempts(), vec!["old", "office"]);
    assert!(
        h.console
            .notices()
            .contains(&"Connection failed! Resetting Wi-Fi credentials.".to_string())
    );
    assert_eq!(h.terminal.state().credential.ssid(), "office");
}

#[tokio::test(start_paused = true)]
async fn test_wifi_setup_failure_is_not_fatal() {
    let mut h = Harness::open().await;
    h.radio.force_link("office");
    h.files.fail_writes(true);

    h.present("999").await;
    h.press(&[Down, Down, Enter]).await;
    let outcome = h.run_scan().await;

    assert_eq!(
        outcome.menu,
        Some(MenuOutcome::Selected(AdminOption::WifiSetup))
    );
    assert!(h.display.has_shown("Wi-Fi Error!"));
}

#[tokio::test(start_paused = true)]
async fn test_wifi_connects_when_credential_cannot_be_saved() {
    let mut h = Harness::open().await;
    h.radio.add_network("office", "secret");
    h.files.fail_writes(true);
    h.console.type_line("office").await.unwrap();
    h.console.type_line("secret").await.unwrap();

    h.present("999").await;
    h.press(&[Down, Down, Enter]).await;
    h.run_scan().await;

    assert!(h.display.has_shown("Connected"));
    assert!(!h.display.has_shown("Wi-Fi Error!"));
    assert!(h.radio.is_connected());
    assert_eq!(h.terminal.state().credential.ssid(), "office");
}
