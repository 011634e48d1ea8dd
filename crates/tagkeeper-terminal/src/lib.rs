//! Control flow of the Tagkeeper access terminal.
//!
//! This crate ties the peripherals, the stored records and the Wi-Fi manager
//! together into the terminal's state machine:
//!
//! ```text
//! ScanSession ──admin card──> AdminMenu ──> WriteMode
//!      ▲                          │    ├──> LogViewer
//!      │                          │    ├──> Wi-Fi setup
//!      │                          │    └──> EventsMenu ──> EventSession
//!      └──────────────────────────┘
//! ```
//!
//! Everything runs sequentially on one task. A [`Terminal`] owns the
//! peripherals of its [`Platform`] and an [`AppState`]; each controller is a
//! method borrowing the terminal mutably for as long as it runs.
//!
//! # Example
//!
//! ```no_run
//! use tagkeeper_terminal::{Peripherals, Platform, Terminal, TerminalConfig};
//! # async fn example<P: Platform>(peripherals: Peripherals<P>) -> tagkeeper_terminal::Result<()> {
//! let config = TerminalConfig::from_env()?;
//! let mut terminal = Terminal::open(peripherals, &config).await?;
//! terminal.run().await
//! # }
//! ```

pub mod admin;
pub mod config;
pub mod display;
pub mod error;
pub mod events;
pub mod log_viewer;
pub mod menu;
pub mod messages;
pub mod platform;
pub mod scan;
pub mod state;
pub mod terminal;
pub mod write_mode;

pub use config::{NetworkConfig, TerminalConfig, Timings};
pub use display::{Frame, VirtualDisplay, VirtualDisplayBuilder, truncate_text};
pub use error::{Result, TerminalError};
pub use events::{EndOutcome, EventSession, ScanRecord, StartOutcome};
pub use log_viewer::LogCursor;
pub use menu::{AdminOption, EventsOption, Menu, MenuOption, MenuOutcome};
pub use messages::DisplayMessages;
pub use platform::{Peripherals, Platform};
pub use scan::ScanOutcome;
pub use state::AppState;
pub use terminal::Terminal;
pub use write_mode::WriteOutcome;
