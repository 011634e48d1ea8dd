//! Whitelist editing: one card per visit.

use crate::error::Result;
use crate::messages::DisplayMessages;
use crate::platform::Platform;
use crate::terminal::Terminal;
use tagkeeper_core::CardId;
use tagkeeper_hardware::Button;
use tracing::info;

/// What write mode did with the scanned card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The card was not whitelisted and now is.
    Added(CardId),

    /// The card was whitelisted and the deletion was confirmed.
    Removed(CardId),

    /// The card was whitelisted and the deletion was cancelled.
    Kept(CardId),
}

impl<P: Platform> Terminal<P> {
    /// Scan one card and toggle its whitelist membership.
    ///
    /// Removing a card asks for confirmation: Enter deletes, Up or Down
    /// cancels. Adding needs no confirmation.
    pub async fn write_mode(&mut self) -> Result<WriteOutcome> {
        self.show_screen(DisplayMessages::WRITE_MODE_PROMPT).await?;
        let card = self.scanner.next_card().await?;

        if !self.state.whitelist.contains(&card) {
            self.state.whitelist.insert(card.clone());
            info!(card = %card, "Card added to whitelist");
            self.persist_whitelist().await?;
            self.show(DisplayMessages::CARD_ADDED, card.as_str()).await?;
            self.hold(self.timings.message_hold).await;
            return Ok(WriteOutcome::Added(card));
        }

        self.show_screen(DisplayMessages::CARD_REGISTERED).await?;
        let confirmed = self.input.wait_press(None).await? == Some(Button::Enter);

        if confirmed {
            self.state.whitelist.remove(&card);
            info!(card = %card, "Card removed from whitelist");
            self.persist_whitelist().await?;
            self.show(DisplayMessages::CARD_DELETED, card.as_str()).await?;
            self.hold(self.timings.indicator_pulse).await;
            Ok(WriteOutcome::Removed(card))
        } else {
            info!(card = %card, "Deletion cancelled");
            self.show_screen(DisplayMessages::DELETION_CANCELED).await?;
            self.hold(self.timings.indicator_pulse).await;
            Ok(WriteOutcome::Kept(card))
        }
    }
}
