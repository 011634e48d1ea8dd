//! Integration tests for attendance events.

mod common;

use common::{Harness, seed_whitelist};
use tagkeeper_core::EventLogEntry;
use tagkeeper_hardware::Button::{Down, Enter};
use tagkeeper_storage::MemoryStore;
use tagkeeper_terminal::{
    AdminOption, EndOutcome, EventsOption, MenuOutcome, StartOutcome,
};

const EVENT_FILE: &str = "E_250510_1246.json";

fn stored_event(files: &MemoryStore) -> Vec<EventLogEntry> {
    serde_json::from_slice(&files.get(EVENT_FILE).unwrap()).unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_event_round_trip_through_menus() {
    let mut h = Harness::open().await;

    // Admin menu: Events Mode (fourth option), then Start Event.
    h.present("999").await;
    h.press(&[Down, Down, Down, Enter, Enter]).await;
    let outcome = h.run_scan().await;

    assert_eq!(
        outcome.menu,
        Some(MenuOutcome::Selected(AdminOption::EventsMode))
    );
    assert_eq!(h.terminal.state().event.file_name(), Some(EVENT_FILE));
    assert_eq!(h.files.get_string(EVENT_FILE).unwrap(), "[]");
    assert!(h.display.has_shown("Event Started"));

    h.scan("111").await;
    h.scan("222").await;

    let entries = stored_event(&h.files);
    let uids: Vec<&str> = entries.iter().map(|e| e.uid.as_str()).collect();
    assert_eq!(uids, vec!["111", "222"]);
    assert!(entries.iter().all(|e| e.time == "10-05-25 12:46"));
    assert!(entries.iter().all(|e| e.name.is_none()));
    assert!(h.display.has_shown("Event Log:"));

    // The admin menu reopens on Events Mode; End Event is second.
    h.present("999").await;
    h.press(&[Enter, Down, Enter]).await;
    h.run_scan().await;

    assert!(!h.terminal.state().event.is_active());
    assert!(h.display.has_shown("Saving logs..."));

    // The closing admin scan was recorded before the event ended.
    let uids: Vec<String> = stored_event(&h.files)
        .into_iter()
        .map(|e| e.uid.to_string())
        .collect();
    assert_eq!(uids, vec!["111", "222", "999"]);

    h.scan("333").await;
    assert_eq!(stored_event(&h.files).len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_scans_logged_whatever_the_decision() {
    let files = MemoryStore::new();
    seed_whitelist(&files, &["123"]);
    let mut h = Harness::with_files(files).await;
    h.terminal.start_event().await.unwrap();

    h.scan("123").await;
    h.scan("555").await;

    let uids: Vec<String> = stored_event(&h.files)
        .into_iter()
        .map(|e| e.uid.to_string())
        .collect();
    assert_eq!(uids, vec!["123", "555"]);
    assert_eq!(h.terminal.state().log.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_start_twice_keeps_one_session() {
    let mut h = Harness::open().await;

    let first = h.terminal.start_event().await.unwrap();
    assert!(matches!(first, StartOutcome::Started { .. }));

    h.clock.advance_minutes(30);
    let second = h.terminal.start_event().await.unwrap();

    assert_eq!(
        second,
        StartOutcome::AlreadyActive {
            file: EVENT_FILE.to_string()
        }
    );
    assert_eq!(h.terminal.state().event.file_name(), Some(EVENT_FILE));
    assert!(!h.files.contains("E_250510_1316.json"));
    assert!(h.display.has_shown("End first!"));
}

#[tokio::test(start_paused = true)]
async fn test_start_without_clock_stays_inactive() {
    let mut h = Harness::open().await;
    h.clock.fail();

    let outcome = h.terminal.start_event().await.unwrap();

    assert_eq!(outcome, StartOutcome::ClockUnavailable);
    assert!(!h.terminal.state().event.is_active());
    assert!(h.display.has_shown("Clock Error!"));
    assert!(h.files.names().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_start_with_file_error_stays_inactive() {
    let mut h = Harness::open().await;
    h.files.fail_writes(true);

    let outcome = h.terminal.start_event().await.unwrap();

    assert_eq!(outcome, StartOutcome::FileError);
    assert!(!h.terminal.state().event.is_active());
    assert!(h.display.has_shown("File Error!"));
}

#[tokio::test(start_paused = true)]
async fn test_log_error_does_not_abort_scan() {
    let mut h = Harness::open().await;
    h.terminal.start_event().await.unwrap();
    h.files.fail_writes(true);

    let outcome = h.scan("555").await;

    assert_eq!(outcome.card, common::card("555"));
    assert!(h.display.has_shown("Log Error!"));
    assert!(h.display.has_shown("Access Denied!"));
    assert!(h.terminal.state().event.is_active());
}

#[tokio::test(start_paused = true)]
async fn test_end_without_event() {
    let mut h = Harness::open().await;

    let outcome = h.terminal.end_event().await.unwrap();

    assert_eq!(outcome, EndOutcome::NotActive);
    assert_eq!(h.display.get_all_lines(), vec!["No event", "to end!"]);
}

#[tokio::test(start_paused = true)]
async fn test_events_menu_timeout() {
    let mut h = Harness::open().await;

    let outcome = h.terminal.events_menu().await.unwrap();

    assert_eq!(outcome, MenuOutcome::TimedOut);
    assert!(h.display.has_shown("Exiting..."));
    assert!(!h.terminal.state().event.is_active());
}

#[tokio::test(start_paused = true)]
async fn test_events_menu_starts_on_first_option() {
    let mut h = Harness::open().await;

    h.press(&[Down, Down, Enter]).await;
    assert_eq!(
        h.terminal.events_menu().await.unwrap(),
        MenuOutcome::Selected(EventsOption::Exit)
    );

    h.press(&[Enter]).await;
    assert_eq!(
        h.terminal.events_menu().await.unwrap(),
        MenuOutcome::Selected(EventsOption::StartEvent)
    );
    assert!(h.terminal.state().event.is_active());
}
