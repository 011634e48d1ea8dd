//! Peripheral abstraction layer for the Tagkeeper access terminal.
//!
//! This crate provides trait-based abstractions for the peripherals the
//! terminal core talks to: the RFID reader, the three-button pad, the
//! character display, the grant/deny indicator, the clock, the Wi-Fi radio
//! and the operator console. These traits enable easy substitution between
//! mock implementations (for development and testing) and real drivers.
//!
//! # Design Philosophy
//!
//! - **Async-first**: All I/O operations are asynchronous using native `async fn`
//!   in traits (Rust 1.90 + Edition 2024 RPITIT).
//! - **Thread-safe**: All traits require `Send + Sync` for use with Tokio.
//! - **Error-aware**: All operations return `Result<T>` with detailed error information.
//!
//! On top of the raw traits sit two waiting primitives: [`InputController`]
//! (debounced button presses with an optional deadline) and [`CardScanner`]
//! (fixed-interval card polling).
//!
//! ```no_run
//! use std::time::Duration;
//! use tagkeeper_hardware::mock::{MockButtons, MockRfid};
//! use tagkeeper_hardware::{CardScanner, InputController};
//!
//! # async fn example() -> tagkeeper_hardware::Result<()> {
//! let (reader, _cards) = MockRfid::new();
//! let (pad, _buttons) = MockButtons::new();
//!
//! let mut scanner = CardScanner::new(reader);
//! let mut input = InputController::new(pad);
//!
//! let card = scanner.next_card().await?;
//! let press = input.wait_press(Some(Duration::from_secs(5))).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All operations return [`Result<T>`][error::Result] which uses the
//! [`HardwareError`] error type.

pub mod clock;
pub mod error;
pub mod input;
pub mod mock;
pub mod scanner;
pub mod traits;
pub mod types;

// Re-export commonly used types for convenience
pub use clock::SystemClock;
pub use error::{HardwareError, Result};
pub use input::InputController;
pub use scanner::CardScanner;
pub use traits::{
    ButtonPad, CardData, Clock, OperatorConsole, RfidReader, StatusLed, TextDisplay, WifiRadio,
};
pub use types::{Button, LedColor, ReaderInfo};
