//! Passive scanning: the terminal's top-level loop.

use crate::error::Result;
use crate::menu::{AdminOption, MenuOutcome};
use crate::messages::DisplayMessages;
use crate::platform::Platform;
use crate::terminal::Terminal;
use tagkeeper_core::time::format_or_placeholder;
use tagkeeper_core::{AccessDecision, CardId, LogEntry};
use tagkeeper_hardware::{LedColor, StatusLed};
use tracing::{debug, info};

/// What happened to one scanned card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    pub card: CardId,
    pub decision: AccessDecision,

    /// Formatted scan time, or the unknown-time placeholder.
    pub time: String,

    /// How the admin menu ended, when the card opened it.
    pub menu: Option<MenuOutcome<AdminOption>>,
}

impl<P: Platform> Terminal<P> {
    /// Report connectivity, then scan forever.
    ///
    /// # Errors
    ///
    /// Returns only on a peripheral failure the terminal cannot continue
    /// past (a disconnected reader, button pad or display).
    pub async fn run(&mut self) -> Result<()> {
        self.report_startup().await?;
        loop {
            self.scan_once().await?;
        }
    }

    /// One-time connectivity report on the operator console.
    pub async fn report_startup(&mut self) -> Result<()> {
        self.wifi.report_status(&self.state.credential).await?;
        Ok(())
    }

    /// Prompt for a card, decide, log and signal the result.
    ///
    /// Admin cards open the admin menu before this returns. A denied card
    /// leaves the access log untouched. While an event is running every
    /// card is recorded in its attendance file, whatever the decision.
    pub async fn scan_once(&mut self) -> Result<ScanOutcome> {
        self.show_screen(DisplayMessages::SCAN_PROMPT).await?;
        let card = self.scanner.next_card().await?;
        self.show(DisplayMessages::CARD_DETECTED, card.as_str()).await?;

        let now = self.local_time().await;
        let time = format_or_placeholder(now.as_ref());

        if self.state.event.is_active() {
            self.log_event_scan(&card, &time).await?;
        }

        let decision = self.state.decide(&card);
        let mut menu = None;

        match decision {
            AccessDecision::Admin | AccessDecision::Granted => {
                info!(card = %card, %decision, "Access granted");
                self.state.log.push(LogEntry::new(time.clone(), card.clone()));
                self.persist_log().await?;

                self.show_screen(DisplayMessages::ACCESS_GRANTED).await?;
                self.pulse(LedColor::Green).await?;

                if decision == AccessDecision::Admin {
                    menu = Some(self.admin_menu().await?);
                }
            }
            AccessDecision::Denied => {
                info!(card = %card, "Access denied");
                self.show_screen(DisplayMessages::ACCESS_DENIED).await?;
                self.pulse(LedColor::Red).await?;
            }
        }

        debug!(card = %card, "Back to scan mode");
        Ok(ScanOutcome {
            card,
            decision,
            time,
            menu,
        })
    }

    /// Turn the indicator off and say goodbye.
    pub async fn farewell(&mut self) -> Result<()> {
        info!("Exiting scan mode");
        self.led.set_led(LedColor::Off).await?;
        self.show_screen(DisplayMessages::FAREWELL).await
    }
}
