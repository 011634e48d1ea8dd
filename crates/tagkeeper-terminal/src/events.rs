//! Attendance events.
//!
//! While an event runs, every scanned card is appended to the event's own
//! file, named after the minute the event started
//! (`E_{yy}{mm}{dd}_{hh}{mm}.json`). At most one event runs at a time.

use crate::error::Result;
use crate::menu::{EventsOption, Menu, MenuOption, MenuOutcome};
use crate::messages::DisplayMessages;
use crate::platform::Platform;
use crate::terminal::Terminal;
use tagkeeper_core::{CardId, EventLogEntry, LocalTimestamp};
use tagkeeper_storage::{FileStore, PersistenceStore};
use tracing::{error, info, warn};

/// The running attendance event, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSession {
    file: Option<String>,
}

/// Result of [`EventSession::start`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    Started { file: String, at: LocalTimestamp },

    /// An event was already running; it is left untouched.
    AlreadyActive { file: String },

    /// No local time to name the file after. Nothing was started.
    ClockUnavailable,

    /// The file could not be created. Nothing was started.
    FileError,
}

/// Result of [`EventSession::end`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndOutcome {
    /// The event stopped; its file is kept.
    Ended { file: String },
    NotActive,
}

/// Result of [`EventSession::log_scan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanRecord {
    Inactive,
    Logged { file: String },

    /// The entry could not be written and is lost.
    Failed,
}

impl EventSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.file.is_some()
    }

    /// Attendance file of the running event.
    pub fn file_name(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// Start an event at `now`.
    ///
    /// The session only becomes active once its file exists holding an
    /// empty list.
    pub async fn start<F: FileStore>(
        &mut self,
        now: Option<LocalTimestamp>,
        store: &PersistenceStore<F>,
    ) -> StartOutcome {
        if let Some(file) = &self.file {
            return StartOutcome::AlreadyActive { file: file.clone() };
        }
        let Some(at) = now else {
            warn!("Cannot start event without local time");
            return StartOutcome::ClockUnavailable;
        };

        let file = at.event_file_name();
        if let Err(e) = store.create_event_log(&file).await {
            error!(file = %file, "Creating event log failed: {}", e);
            return StartOutcome::FileError;
        }

        info!(file = %file, "Event started");
        self.file = Some(file.clone());
        StartOutcome::Started { file, at }
    }

    /// Stop the running event.
    pub fn end(&mut self) -> EndOutcome {
        match self.file.take() {
            Some(file) => {
                info!(file = %file, "Event ended");
                EndOutcome::Ended { file }
            }
            None => EndOutcome::NotActive,
        }
    }

    /// Append `card` scanned at `time` to the running event's file.
    pub async fn log_scan<F: FileStore>(
        &self,
        card: &CardId,
        time: &str,
        store: &PersistenceStore<F>,
    ) -> ScanRecord {
        let Some(file) = &self.file else {
            return ScanRecord::Inactive;
        };

        let entry = EventLogEntry::new(card.clone(), time);
        match store.append_event_entry(file, entry).await {
            Ok(()) => ScanRecord::Logged { file: file.clone() },
            Err(e) => {
                error!(file = %file, card = %card, "Recording attendance failed: {}", e);
                ScanRecord::Failed
            }
        }
    }
}

impl<P: Platform> Terminal<P> {
    /// Browse the events menu and run at most one selected option.
    ///
    /// Unlike the admin menu, the position starts on the first option on
    /// every visit.
    pub async fn events_menu(&mut self) -> Result<MenuOutcome<EventsOption>> {
        let mut menu = Menu::new(
            DisplayMessages::EVENTS_MENU_TITLE,
            &EventsOption::ALL,
            self.timings.menu_idle_timeout,
        );
        let outcome = menu.run(&mut self.input, &mut self.display).await?;

        match outcome {
            MenuOutcome::TimedOut => {
                info!("Events menu timed out");
                self.flash(DisplayMessages::EVENTS_TIMEOUT).await?;
            }
            MenuOutcome::Selected(option) => {
                self.show(DisplayMessages::SELECTED, option.label()).await?;
                self.hold(self.timings.message_hold).await;
                match option {
                    EventsOption::StartEvent => {
                        self.start_event().await?;
                    }
                    EventsOption::EndEvent => {
                        self.end_event().await?;
                    }
                    EventsOption::Exit => {}
                }
            }
        }

        Ok(outcome)
    }

    /// Start an attendance event and report the result on the display.
    pub async fn start_event(&mut self) -> Result<StartOutcome> {
        let now = self.local_time().await;
        let outcome = self.state.event.start(now, &self.store).await;

        match &outcome {
            StartOutcome::Started { at, .. } => {
                self.show(DisplayMessages::EVENT_STARTED, &at.format())
                    .await?;
                self.hold(self.timings.message_hold).await;
            }
            StartOutcome::AlreadyActive { .. } => {
                self.flash(DisplayMessages::EVENT_IN_PROGRESS).await?;
            }
            StartOutcome::ClockUnavailable => self.flash(DisplayMessages::CLOCK_ERROR).await?,
            StartOutcome::FileError => self.flash(DisplayMessages::FILE_ERROR).await?,
        }

        Ok(outcome)
    }

    /// Stop the running event and report the result on the display.
    pub async fn end_event(&mut self) -> Result<EndOutcome> {
        let outcome = self.state.event.end();
        match outcome {
            EndOutcome::Ended { .. } => self.flash(DisplayMessages::EVENT_ENDED).await?,
            EndOutcome::NotActive => self.flash(DisplayMessages::NO_EVENT).await?,
        }
        Ok(outcome)
    }

    /// Record a scan in the running event, showing the result.
    pub(crate) async fn log_event_scan(&mut self, card: &CardId, time: &str) -> Result<ScanRecord> {
        let record = self.state.event.log_scan(card, time, &self.store).await;
        match record {
            ScanRecord::Logged { .. } => {
                self.show(DisplayMessages::EVENT_LOGGED, card.as_str())
                    .await?;
                self.hold(self.timings.indicator_pulse).await;
            }
            ScanRecord::Failed => self.flash(DisplayMessages::LOG_ERROR).await?,
            ScanRecord::Inactive => {}
        }
        Ok(record)
    }
}
