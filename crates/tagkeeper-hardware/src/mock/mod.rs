//! Mock device implementations for testing and development.
//!
//! This module provides simulated device implementations that can be controlled
//! programmatically without requiring physical hardware. Each mock comes with
//! a handle used to drive it or inspect what it was asked to do.

pub mod buttons;
pub mod clock;
pub mod console;
pub mod led;
pub mod radio;
pub mod rfid;

// Re-export commonly used types
pub use buttons::{MockButtons, MockButtonsHandle};
pub use clock::{MockClock, MockClockHandle};
pub use console::{ConsoleLine, MockConsole, MockConsoleHandle};
pub use led::{MockLed, MockLedHandle};
pub use radio::{MockRadio, MockRadioHandle};
pub use rfid::{MockRfid, MockRfidHandle};

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lock shared mock state. A panic in another holder does not poison it.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
