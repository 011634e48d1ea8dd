//! Shared harness: a terminal on mock peripherals with a handle on each.

#![allow(dead_code)]

use tagkeeper_core::constants::{ACCESS_LOG_FILE, WHITELIST_FILE};
use tagkeeper_core::{CardId, LocalTimestamp, LogEntry};
use tagkeeper_hardware::mock::{
    MockButtons, MockButtonsHandle, MockClock, MockClockHandle, MockConsole, MockConsoleHandle,
    MockLed, MockLedHandle, MockRadio, MockRadioHandle, MockRfid, MockRfidHandle,
};
use tagkeeper_hardware::Button;
use tagkeeper_storage::MemoryStore;
use tagkeeper_terminal::{
    Peripherals, Platform, ScanOutcome, Terminal, TerminalConfig, VirtualDisplay,
};

pub struct MockPlatform;

impl Platform for MockPlatform {
    type Reader = MockRfid;
    type Buttons = MockButtons;
    type Display = VirtualDisplay;
    type Led = MockLed;
    type Clock = MockClock;
    type Radio = MockRadio;
    type Console = MockConsole;
    type Files = MemoryStore;
}

pub struct Harness {
    pub terminal: Terminal<MockPlatform>,
    pub cards: MockRfidHandle,
    pub buttons: MockButtonsHandle,
    pub display: VirtualDisplay,
    pub led: MockLedHandle,
    pub clock: MockClockHandle,
    pub radio: MockRadioHandle,
    pub console: MockConsoleHandle,
    pub files: MemoryStore,
}

/// Card "999" is the only admin card.
pub fn config() -> TerminalConfig {
    TerminalConfig::new("unused").admin_cards(["999"])
}

pub fn card(id: &str) -> CardId {
    CardId::new(id).unwrap()
}

/// 10 May 2025, 12:46 local time.
pub fn start_time() -> LocalTimestamp {
    LocalTimestamp::from_ymd_hm(2025, 5, 10, 12, 46).unwrap()
}

pub fn seed_whitelist(files: &MemoryStore, ids: &[&str]) {
    files.insert(WHITELIST_FILE, serde_json::to_vec(ids).unwrap());
}

pub fn seed_log(files: &MemoryStore, ids: &[&str]) {
    let entries: Vec<LogEntry> = ids
        .iter()
        .map(|id| LogEntry::new("09-05-25 08:00", card(id)))
        .collect();
    files.insert(ACCESS_LOG_FILE, serde_json::to_vec(&entries).unwrap());
}

pub fn stored_log(files: &MemoryStore) -> Vec<LogEntry> {
    files
        .get(ACCESS_LOG_FILE)
        .map(|bytes| serde_json::from_slice(&bytes).unwrap())
        .unwrap_or_default()
}

pub fn stored_whitelist(files: &MemoryStore) -> Vec<String> {
    files
        .get(WHITELIST_FILE)
        .map(|bytes| serde_json::from_slice(&bytes).unwrap())
        .unwrap_or_default()
}

impl Harness {
    pub async fn open() -> Self {
        Self::with_files(MemoryStore::new()).await
    }

    pub async fn with_files(files: MemoryStore) -> Self {
        let (reader, cards) = MockRfid::new();
        let (pad, buttons) = MockButtons::new();
        let (led, led_handle) = MockLed::new();
        let (clock, clock_handle) = MockClock::new(start_time());
        let (radio, radio_handle) = MockRadio::new();
        let (console, console_handle) = MockConsole::new();
        let display = VirtualDisplay::new();

        let peripherals = Peripherals::<MockPlatform> {
            reader,
            buttons: pad,
            display: display.clone(),
            led,
            clock,
            radio,
            console,
            files: files.clone(),
        };
        let terminal = Terminal::open(peripherals, &config()).await.unwrap();

        Self {
            terminal,
            cards,
            buttons,
            display,
            led: led_handle,
            clock: clock_handle,
            radio: radio_handle,
            console: console_handle,
            files,
        }
    }

    /// Present `id` and run one pass of the scan loop.
    pub async fn scan(&mut self, id: &str) -> ScanOutcome {
        self.cards.present_id(&card(id)).await.unwrap();
        self.terminal.scan_once().await.unwrap()
    }

    /// Run one pass of the scan loop on cards queued beforehand.
    pub async fn run_scan(&mut self) -> ScanOutcome {
        self.terminal.scan_once().await.unwrap()
    }

    /// Queue presses for whatever reads the pad next.
    pub async fn press(&self, buttons: &[Button]) {
        self.buttons.press_all(buttons).await.unwrap();
    }

    /// Queue a card for whatever reads the reader next.
    pub async fn present(&self, id: &str) {
        self.cards.present_id(&card(id)).await.unwrap();
    }
}
