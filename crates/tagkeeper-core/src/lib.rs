pub mod constants;
pub mod credential;
pub mod error;
pub mod log;
pub mod time;
pub mod types;

pub use credential::WifiCredential;
pub use error::{Error, Result};
pub use log::{EventLogEntry, LogEntry, RollingLog};
pub use time::LocalTimestamp;
pub use types::*;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
