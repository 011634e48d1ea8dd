//! Button-driven option menus.
//!
//! A [`Menu`] shows its title on the first display line and the current
//! option on the second. Up and Down move through the options with
//! wraparound; Enter commits. When no button is pressed for the idle window
//! the menu closes on its own. Every accepted press restarts the window.
//!
//! ```text
//!        Up/Down (wrap)
//!          ┌──────┐
//!          ▼      │
//!      ┌────────────┐  Enter   ┌──────────────┐
//!  ───>│  browsing  │─────────>│ Selected(T)  │
//!      └────────────┘          └──────────────┘
//!            │ idle window
//!            ▼
//!      ┌────────────┐
//!      │  TimedOut  │
//!      └────────────┘
//! ```

use std::fmt;
use std::time::Duration;
use tagkeeper_hardware::{Button, ButtonPad, InputController, Result, TextDisplay};
use tracing::debug;

/// An entry of a menu.
pub trait MenuOption: Copy + fmt::Debug + Send + Sync + 'static {
    /// Text shown on the second display line.
    fn label(self) -> &'static str;
}

/// Entries of the admin menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminOption {
    WriteMode,
    ViewLogs,
    WifiSetup,
    EventsMode,
    Return,
}

impl AdminOption {
    pub const ALL: [AdminOption; 5] = [
        Self::WriteMode,
        Self::ViewLogs,
        Self::WifiSetup,
        Self::EventsMode,
        Self::Return,
    ];
}

impl MenuOption for AdminOption {
    fn label(self) -> &'static str {
        match self {
            Self::WriteMode => "Write Mode",
            Self::ViewLogs => "View Logs",
            Self::WifiSetup => "Wi-Fi Setup",
            Self::EventsMode => "Events Mode",
            Self::Return => "Return",
        }
    }
}

/// Entries of the events menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventsOption {
    StartEvent,
    EndEvent,
    Exit,
}

impl EventsOption {
    pub const ALL: [EventsOption; 3] = [Self::StartEvent, Self::EndEvent, Self::Exit];
}

impl MenuOption for EventsOption {
    fn label(self) -> &'static str {
        match self {
            Self::StartEvent => "Start Event",
            Self::EndEvent => "End Event",
            Self::Exit => "Exit",
        }
    }
}

/// How a menu run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome<T> {
    /// Enter was pressed on this option.
    Selected(T),

    /// The idle window passed without a press.
    TimedOut,
}

/// A wraparound option menu with an idle timeout.
#[derive(Debug, Clone)]
pub struct Menu<T: 'static> {
    title: &'static str,
    options: &'static [T],
    index: usize,
    idle_timeout: Duration,
}

impl<T: MenuOption> Menu<T> {
    /// Create a menu positioned on the first option.
    ///
    /// `options` must not be empty.
    pub fn new(title: &'static str, options: &'static [T], idle_timeout: Duration) -> Self {
        debug_assert!(!options.is_empty(), "menu {title:?} has no options");
        Self {
            title,
            options,
            index: 0,
            idle_timeout,
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The highlighted option.
    pub fn current(&self) -> T {
        self.options[self.index]
    }

    pub fn move_up(&mut self) {
        self.index = (self.index + self.options.len() - 1) % self.options.len();
    }

    pub fn move_down(&mut self) {
        self.index = (self.index + 1) % self.options.len();
    }

    /// Go back to the first option.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Show the menu and browse until an option is committed or the idle
    /// window passes.
    ///
    /// The position is kept when the run ends, so the next run starts on
    /// the last highlighted option.
    ///
    /// # Errors
    ///
    /// Returns an error if the display or the button pad fails.
    pub async fn run<B, D>(
        &mut self,
        input: &mut InputController<B>,
        display: &mut D,
    ) -> Result<MenuOutcome<T>>
    where
        B: ButtonPad,
        D: TextDisplay,
    {
        loop {
            display.show(self.title, self.current().label()).await?;

            match input.wait_press(Some(self.idle_timeout)).await? {
                None => {
                    debug!(menu = self.title, "Menu idle timeout");
                    return Ok(MenuOutcome::TimedOut);
                }
                Some(Button::Up) => self.move_up(),
                Some(Button::Down) => self.move_down(),
                Some(Button::Enter) => {
                    let option = self.current();
                    debug!(menu = self.title, ?option, "Menu option selected");
                    return Ok(MenuOutcome::Selected(option));
                }
            }
        }
    }
}
