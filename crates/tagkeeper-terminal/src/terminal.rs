//! The terminal: peripherals, records and state in one owner.
//!
//! Controllers are implemented as methods on [`Terminal`] in their own
//! modules (`scan`, `admin`, `write_mode`, `log_viewer`, `events`). They run
//! one at a time on a single task, so state is borrowed, never shared.

use crate::config::{TerminalConfig, Timings};
use crate::error::Result;
use crate::menu::{AdminOption, Menu};
use crate::messages::{DisplayMessages, Screen};
use crate::platform::{Peripherals, Platform};
use crate::state::AppState;
use std::time::Duration;
use tagkeeper_core::LocalTimestamp;
use tagkeeper_hardware::{
    CardScanner, Clock, InputController, LedColor, RfidReader, StatusLed, TextDisplay,
};
use tagkeeper_network::WifiCredentialManager;
use tagkeeper_storage::PersistenceStore;
use tokio::time;
use tracing::{error, info, warn};

/// An access terminal running on platform `P`.
pub struct Terminal<P: Platform> {
    pub(crate) scanner: CardScanner<P::Reader>,
    pub(crate) input: InputController<P::Buttons>,
    pub(crate) display: P::Display,
    pub(crate) led: P::Led,
    pub(crate) clock: P::Clock,
    pub(crate) wifi: WifiCredentialManager<P::Radio, P::Console>,
    pub(crate) store: PersistenceStore<P::Files>,
    pub(crate) state: AppState,
    pub(crate) admin_menu: Menu<AdminOption>,
    pub(crate) timings: Timings,
}

impl<P: Platform> Terminal<P> {
    /// Assemble a terminal and load its stored records.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the card reader
    /// does not answer.
    pub async fn open(peripherals: Peripherals<P>, config: &TerminalConfig) -> Result<Self> {
        config.validate()?;
        let timings = config.timings();

        let store = PersistenceStore::new(peripherals.files);
        let reader = peripherals.reader.reader_info().await?;
        let state = AppState::load(config.admin_set()?, &store).await;
        info!(
            reader = %reader.name,
            cards = state.whitelist.len(),
            log_entries = state.log.len(),
            admins = state.admins.len(),
            wifi_configured = state.credential.is_set(),
            "Terminal ready"
        );

        Ok(Self {
            scanner: CardScanner::new(peripherals.reader).with_interval(timings.card_poll_interval),
            input: InputController::new(peripherals.buttons).with_debounce(timings.debounce),
            display: peripherals.display,
            led: peripherals.led,
            clock: peripherals.clock,
            wifi: WifiCredentialManager::new(peripherals.radio, peripherals.console)
                .with_retry(config.retry_policy()),
            store,
            state,
            admin_menu: Menu::new(
                DisplayMessages::ADMIN_MENU_TITLE,
                &AdminOption::ALL,
                timings.menu_idle_timeout,
            ),
            timings,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &PersistenceStore<P::Files> {
        &self.store
    }

    pub fn timings(&self) -> Timings {
        self.timings
    }

    pub fn wifi(&self) -> &WifiCredentialManager<P::Radio, P::Console> {
        &self.wifi
    }

    pub(crate) async fn show(&mut self, line1: &str, line2: &str) -> Result<()> {
        self.display.show(line1, line2).await?;
        Ok(())
    }

    pub(crate) async fn show_screen(&mut self, (line1, line2): Screen) -> Result<()> {
        self.show(line1, line2).await
    }

    /// Show `screen` and keep it up for the message hold time.
    pub(crate) async fn flash(&mut self, screen: Screen) -> Result<()> {
        self.show_screen(screen).await?;
        self.hold(self.timings.message_hold).await;
        Ok(())
    }

    pub(crate) async fn hold(&self, duration: Duration) {
        time::sleep(duration).await;
    }

    /// Light the indicator for one pulse.
    pub(crate) async fn pulse(&mut self, color: LedColor) -> Result<()> {
        self.led.set_led(color).await?;
        self.hold(self.timings.indicator_pulse).await;
        self.led.set_led(LedColor::Off).await?;
        Ok(())
    }

    /// Current local time; `None` when the clock cannot be read.
    pub(crate) async fn local_time(&mut self) -> Option<LocalTimestamp> {
        match self.clock.local_time().await {
            Ok(now) => Some(now),
            Err(e) => {
                warn!("Local time unavailable: {}", e);
                None
            }
        }
    }

    /// Write the access log. A failure is shown, not returned.
    pub(crate) async fn persist_log(&mut self) -> Result<()> {
        if let Err(e) = self.store.save_log(&self.state.log).await {
            error!("Saving access log failed: {}", e);
            self.flash(DisplayMessages::SAVE_ERROR).await?;
        }
        Ok(())
    }

    /// Write the whitelist. A failure is shown, not returned.
    pub(crate) async fn persist_whitelist(&mut self) -> Result<()> {
        if let Err(e) = self.store.save_whitelist(&self.state.whitelist).await {
            error!("Saving whitelist failed: {}", e);
            self.flash(DisplayMessages::SAVE_ERROR).await?;
        }
        Ok(())
    }
}
