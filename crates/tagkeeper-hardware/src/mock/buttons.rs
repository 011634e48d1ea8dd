//! Mock button pad for testing and development.

use crate::{HardwareError, Result, traits::ButtonPad, types::Button};
use tokio::sync::mpsc;

/// Mock three-button pad.
///
/// Presses sent through the [`MockButtonsHandle`] are delivered in order.
/// The pad reports itself disconnected once every handle is dropped and
/// the queue is drained.
///
/// # Examples
///
/// ```
/// use tagkeeper_hardware::mock::MockButtons;
/// use tagkeeper_hardware::traits::ButtonPad;
/// use tagkeeper_hardware::types::Button;
///
/// #[tokio::main]
/// async fn main() -> tagkeeper_hardware::Result<()> {
///     let (mut pad, handle) = MockButtons::new();
///
///     tokio::spawn(async move {
///         handle.press(Button::Down).await.unwrap();
///         handle.press(Button::Enter).await.unwrap();
///     });
///
///     assert_eq!(pad.next_press().await?, Button::Down);
///     assert_eq!(pad.next_press().await?, Button::Enter);
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct MockButtons {
    /// Channel receiver for simulated presses
    press_rx: mpsc::Receiver<Button>,
}

impl MockButtons {
    /// Create a new mock button pad.
    ///
    /// Returns a tuple of (MockButtons, MockButtonsHandle) where the handle
    /// can be used to simulate presses.
    pub fn new() -> (Self, MockButtonsHandle) {
        let (press_tx, press_rx) = mpsc::channel(32);
        (Self { press_rx }, MockButtonsHandle { press_tx })
    }
}

impl ButtonPad for MockButtons {
    async fn next_press(&mut self) -> Result<Button> {
        self.press_rx
            .recv()
            .await
            .ok_or_else(|| HardwareError::disconnected("Button input channel closed"))
    }
}

/// Handle for controlling a mock button pad.
///
/// This handle can be cloned and shared across tasks.
#[derive(Debug, Clone)]
pub struct MockButtonsHandle {
    /// Channel sender for simulated presses
    press_tx: mpsc::Sender<Button>,
}

impl MockButtonsHandle {
    /// Send a press to the mock pad.
    ///
    /// # Errors
    ///
    /// Returns an error if the pad has been dropped and the channel is closed.
    pub async fn press(&self, button: Button) -> Result<()> {
        self.press_tx
            .send(button)
            .await
            .map_err(|_| HardwareError::disconnected("Button input channel closed"))
    }

    /// Send several presses in order.
    pub async fn press_all(&self, buttons: &[Button]) -> Result<()> {
        for button in buttons {
            self.press(*button).await?;
        }
        Ok(())
    }

    /// Number of presses not yet consumed by the pad.
    pub fn pending(&self) -> usize {
        self.press_tx.max_capacity() - self.press_tx.capacity()
    }
}
