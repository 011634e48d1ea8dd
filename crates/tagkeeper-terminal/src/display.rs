//! Virtual character display.
//!
//! This module provides a virtual 2-line × 16-column display standing in for
//! the terminal's I2C LCD. Text is sanitized and truncated the way the panel
//! would show it, every frame is kept in a bounded history, and frames can be
//! echoed to stdout when the terminal runs on a host.
//!
//! # Character Encoding
//!
//! The panel's character ROM is ASCII only. Control characters are dropped
//! and any other non-ASCII character is shown as `?`.
//!
//! # Examples
//!
//! ```
//! use tagkeeper_terminal::VirtualDisplay;
//!
//! let display = VirtualDisplay::new();
//! display.set_lines("Card detected:", "123456789012345678");
//!
//! assert_eq!(display.get_line(0).unwrap(), "Card detected:");
//! assert_eq!(display.get_line(1).unwrap(), "1234567890123456");
//! ```
//!
//! A clone shares the screen with the original, which lets a test keep a
//! handle on a display that was moved into the terminal:
//!
//! ```
//! use tagkeeper_terminal::VirtualDisplay;
//!
//! let display = VirtualDisplay::new();
//! let observer = display.clone();
//!
//! display.set_lines("Access Granted!", "");
//! assert!(observer.has_shown("Granted"));
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tagkeeper_core::constants::{DISPLAY_COLUMNS, DISPLAY_LINES};
use tagkeeper_hardware::{Result, TextDisplay};
use tracing::debug;

/// Maximum number of frames kept in the history.
const MAX_HISTORY_SIZE: usize = 100;

/// One full screen as it was shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub line1: String,
    pub line2: String,
}

impl Frame {
    /// Returns `true` if either line contains `text`.
    pub fn contains(&self, text: &str) -> bool {
        self.line1.contains(text) || self.line2.contains(text)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.line1, self.line2)
    }
}

#[derive(Debug)]
struct Panel {
    current: Frame,
    history: VecDeque<Frame>,
    capacity: usize,
}

/// Virtual 2-line character display.
///
/// Cloning is cheap and yields a second handle on the same screen.
#[derive(Debug, Clone)]
pub struct VirtualDisplay {
    columns: usize,
    echo: bool,
    panel: Arc<Mutex<Panel>>,
}

impl VirtualDisplay {
    /// Create a 16-column display with no stdout echo.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for a display with custom configuration.
    ///
    /// ```
    /// use tagkeeper_terminal::VirtualDisplay;
    ///
    /// let display = VirtualDisplay::builder()
    ///     .with_columns(20)
    ///     .with_history_size(10)
    ///     .build();
    /// assert_eq!(display.columns(), 20);
    /// ```
    pub fn builder() -> VirtualDisplayBuilder {
        VirtualDisplayBuilder::default()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Replace both lines.
    ///
    /// Control characters are removed and each line is truncated to the
    /// column width; nothing wraps onto the next line.
    pub fn set_lines(&self, line1: &str, line2: &str) {
        let frame = Frame {
            line1: truncate_text(&sanitize_text(line1), self.columns),
            line2: truncate_text(&sanitize_text(line2), self.columns),
        };
        debug!(line1 = %frame.line1, line2 = %frame.line2, "Display updated");

        if self.echo {
            println!("{}", self.render(&frame));
        }

        let mut panel = self.panel();
        if panel.history.len() == panel.capacity {
            panel.history.pop_front();
        }
        panel.history.push_back(frame.clone());
        panel.current = frame;
    }

    /// Blank both lines.
    pub fn clear(&self) {
        self.set_lines("", "");
    }

    /// Text of line `line` (0-based), or `None` past the last line.
    pub fn get_line(&self, line: usize) -> Option<String> {
        let panel = self.panel();
        match line {
            0 => Some(panel.current.line1.clone()),
            1 => Some(panel.current.line2.clone()),
            _ => None,
        }
    }

    /// Both lines, top first.
    pub fn get_all_lines(&self) -> Vec<String> {
        (0..DISPLAY_LINES).filter_map(|i| self.get_line(i)).collect()
    }

    /// The screen currently shown.
    pub fn frame(&self) -> Frame {
        self.panel().current.clone()
    }

    /// Frames shown so far, oldest first.
    pub fn history(&self) -> Vec<Frame> {
        self.panel().history.iter().cloned().collect()
    }

    /// Returns `true` if any frame in the history contains `text`.
    pub fn has_shown(&self, text: &str) -> bool {
        self.panel().history.iter().any(|frame| frame.contains(text))
    }

    pub fn clear_history(&self) {
        self.panel().history.clear();
    }

    fn render(&self, frame: &Frame) -> String {
        let border = format!("+{}+", "-".repeat(self.columns));
        format!(
            "{border}\n|{:<width$}|\n|{:<width$}|\n{border}",
            frame.line1,
            frame.line2,
            width = self.columns
        )
    }

    fn panel(&self) -> MutexGuard<'_, Panel> {
        self.panel.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for VirtualDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TextDisplay for VirtualDisplay {
    async fn show(&mut self, line1: &str, line2: &str) -> Result<()> {
        self.set_lines(line1, line2);
        Ok(())
    }
}

/// Builder for [`VirtualDisplay`].
#[derive(Debug)]
pub struct VirtualDisplayBuilder {
    columns: usize,
    echo: bool,
    history_size: usize,
}

impl VirtualDisplayBuilder {
    /// Set the number of characters per line.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Print every frame to stdout.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Bound the number of frames kept in the history (at least one).
    pub fn with_history_size(mut self, size: usize) -> Self {
        self.history_size = size.max(1);
        self
    }

    pub fn build(self) -> VirtualDisplay {
        VirtualDisplay {
            columns: self.columns,
            echo: self.echo,
            panel: Arc::new(Mutex::new(Panel {
                current: Frame::default(),
                history: VecDeque::with_capacity(self.history_size),
                capacity: self.history_size,
            })),
        }
    }
}

impl Default for VirtualDisplayBuilder {
    fn default() -> Self {
        Self {
            columns: DISPLAY_COLUMNS,
            echo: false,
            history_size: MAX_HISTORY_SIZE,
        }
    }
}

/// Truncate text to a maximum number of characters.
///
/// ```
/// use tagkeeper_terminal::truncate_text;
///
/// assert_eq!(truncate_text("Trying to connect", 16), "Trying to connec");
/// assert_eq!(truncate_text("Short", 16), "Short");
/// ```
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Drop control characters, replace non-ASCII characters and trim.
fn sanitize_text(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control())
        .map(|c| if c.is_ascii() { c } else { '?' })
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_new_display_is_blank() {
        let display = VirtualDisplay::new();
        assert_eq!(display.columns(), DISPLAY_COLUMNS);
        assert_eq!(display.get_all_lines(), vec!["".to_string(), "".to_string()]);
        assert!(display.history().is_empty());
    }

    #[test]
    fn test_set_lines() {
        let display = VirtualDisplay::new();
        display.set_lines("Admin Menu", "Write Mode");

        assert_eq!(display.get_line(0).unwrap(), "Admin Menu");
        assert_eq!(display.get_line(1).unwrap(), "Write Mode");
        assert_eq!(display.get_line(2), None);
    }

    #[test]
    fn test_lines_truncated_at_16_characters() {
        let display = VirtualDisplay::new();
        display.set_lines("Trying to connect to saved network: office", "2415040701999999999");

        assert_eq!(display.get_line(0).unwrap(), "Trying to connec");
        assert_eq!(display.get_line(1).unwrap(), "2415040701999999");
    }

    #[rstest]
    #[case("\nReturning to scan mode...", "Returning to sca")]
    #[case("Tab\there", "Tabhere")]
    #[case("  padded  ", "padded")]
    #[case("Caf\u{e9}", "Caf?")]
    fn test_sanitize(#[case] input: &str, #[case] expected: &str) {
        let display = VirtualDisplay::new();
        display.set_lines(input, "");
        assert_eq!(display.get_line(0).unwrap(), expected);
    }

    #[test]
    fn test_clear() {
        let display = VirtualDisplay::new();
        display.set_lines("Scan your card!", "x");
        display.clear();

        assert_eq!(display.frame(), Frame::default());
        assert_eq!(display.history().len(), 2);
    }

    #[test]
    fn test_history_is_bounded() {
        let display = VirtualDisplay::builder().with_history_size(3).build();
        for i in 0..5 {
            display.set_lines(&format!("frame {i}"), "");
        }

        let history = display.history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].line1, "frame 2");
        assert_eq!(history[2].line1, "frame 4");
    }

    #[test]
    fn test_clone_shares_screen() {
        let display = VirtualDisplay::new();
        let observer = display.clone();

        display.set_lines("Event Started", "10-05-25 12:46");
        assert_eq!(observer.get_line(1).unwrap(), "10-05-25 12:46");
        assert!(observer.has_shown("Event Started"));

        observer.clear_history();
        assert!(!display.has_shown("Event Started"));
    }

    #[test]
    fn test_render_pads_to_width() {
        let display = VirtualDisplay::builder().with_columns(4).build();
        let frame = Frame {
            line1: "ab".to_string(),
            line2: String::new(),
        };
        assert_eq!(display.render(&frame), "+----+\n|ab  |\n|    |\n+----+");
    }

    #[test]
    fn test_frame_display() {
        let frame = Frame {
            line1: "Selected:".to_string(),
            line2: "View Logs".to_string(),
        };
        assert_eq!(frame.to_string(), "Selected: | View Logs");
        assert!(frame.contains("Logs"));
        assert!(!frame.contains("Write"));
    }

    #[tokio::test]
    async fn test_text_display_trait() {
        let mut display = VirtualDisplay::new();
        display.show("No logs", "Press Enter").await.unwrap();
        assert_eq!(display.get_all_lines(), vec!["No logs", "Press Enter"]);

        TextDisplay::clear(&mut display).await.unwrap();
        assert_eq!(display.get_line(0).unwrap(), "");
    }
}
