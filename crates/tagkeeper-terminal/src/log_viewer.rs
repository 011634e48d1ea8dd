//! Browsing the access log with the buttons.

use crate::error::Result;
use crate::messages::DisplayMessages;
use crate::platform::Platform;
use crate::terminal::Terminal;
use tagkeeper_hardware::Button;

/// Position in a non-empty log, clamped to `[0, len - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogCursor {
    index: usize,
    len: usize,
}

impl LogCursor {
    /// A cursor on the most recent of `len` entries; `None` for an empty log.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then(|| Self {
            index: len - 1,
            len,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Step to the previous (older) entry. Returns `false` at the oldest.
    pub fn older(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Step to the next (newer) entry. Returns `false` at the most recent.
    pub fn newer(&mut self) -> bool {
        if self.index + 1 >= self.len {
            return false;
        }
        self.index += 1;
        true
    }
}

impl<P: Platform> Terminal<P> {
    /// Show the access log one entry at a time, newest first.
    ///
    /// Up goes back in time, Down forward, Enter leaves. An empty log shows
    /// a placeholder until Enter is pressed.
    pub async fn view_logs(&mut self) -> Result<()> {
        let Some(mut cursor) = LogCursor::new(self.state.log.len()) else {
            self.show_screen(DisplayMessages::NO_LOGS).await?;
            self.input.wait_for(Button::Enter).await?;
            return Ok(());
        };

        let mut redraw = true;
        loop {
            if redraw && let Some(entry) = self.state.log.get(cursor.index()).cloned() {
                self.show(&entry.time, entry.card.as_str()).await?;
            }

            redraw = match self.input.wait_press(None).await? {
                Some(Button::Up) => cursor.older(),
                Some(Button::Down) => cursor.newer(),
                Some(Button::Enter) | None => return Ok(()),
            };
        }
    }
}
