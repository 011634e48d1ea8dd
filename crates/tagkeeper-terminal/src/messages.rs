//! Operator messages shown on the character display
//!
//! Every text the terminal puts on screen is a constant here. Two-line
//! messages are `(line1, line2)` pairs; single titles are plain strings whose
//! second line is filled in at runtime (a card number, a time, a menu option).
//!
//! # Usage
//!
//! ```
//! use tagkeeper_terminal::messages::DisplayMessages;
//!
//! let (line1, line2) = DisplayMessages::EVENT_IN_PROGRESS;
//! assert_eq!(line1, "Event in prog.");
//! assert_eq!(line2, "End first!");
//! ```

/// A full two-line screen.
pub type Screen = (&'static str, &'static str);

/// Display messages (English, 16 columns)
///
/// # Message Format
///
/// - At most 16 characters per line (hardware limitation)
/// - ASCII only; the display has no extended character set
pub struct DisplayMessages;

impl DisplayMessages {
    // ------------------------------------------------------------------
    // Scanning
    // ------------------------------------------------------------------

    /// Idle prompt between two scans
    pub const SCAN_PROMPT: Screen = ("Scan your card!", "");

    /// Title above the identifier of the card just read
    pub const CARD_DETECTED: &'static str = "Card detected:";

    pub const ACCESS_GRANTED: Screen = ("Access Granted!", "");

    pub const ACCESS_DENIED: Screen = ("Access Denied!", "");

    /// Shown when the terminal is interrupted
    pub const FAREWELL: Screen = ("Exiting scan", "Goodbye!");

    /// A record could not be written; the change lives in memory only
    pub const SAVE_ERROR: Screen = ("Save Error!", "Not stored");

    // ------------------------------------------------------------------
    // Menus
    // ------------------------------------------------------------------

    pub const ADMIN_MENU_TITLE: &'static str = "Admin Menu";

    pub const EVENTS_MENU_TITLE: &'static str = "Events Mode";

    /// Title above the option just committed with Enter
    pub const SELECTED: &'static str = "Selected:";

    /// Admin menu closed after the idle window
    pub const ADMIN_TIMEOUT: Screen = ("Timeout!", "Returning...");

    /// Events menu closed after the idle window
    pub const EVENTS_TIMEOUT: Screen = ("Timeout!", "Exiting...");

    /// "Return" chosen in the admin menu
    pub const RETURNING: Screen = ("Returning", "to scan mode");

    // ------------------------------------------------------------------
    // Write mode
    // ------------------------------------------------------------------

    pub const WRITE_MODE_PROMPT: Screen = ("Write Mode", "Scan a card...");

    /// The scanned card is already whitelisted; Enter deletes it
    pub const CARD_REGISTERED: Screen = ("Registered!", "Enter=Delete");

    pub const CARD_ADDED: &'static str = "Card added:";

    pub const CARD_DELETED: &'static str = "Card deleted:";

    pub const DELETION_CANCELED: Screen = ("Deletion", "canceled");

    // ------------------------------------------------------------------
    // Log viewer
    // ------------------------------------------------------------------

    pub const NO_LOGS: Screen = ("No logs", "Press Enter");

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    /// Title above the start time of the new session
    pub const EVENT_STARTED: &'static str = "Event Started";

    pub const EVENT_IN_PROGRESS: Screen = ("Event in prog.", "End first!");

    pub const NO_EVENT: Screen = ("No event", "to end!");

    pub const EVENT_ENDED: Screen = ("Event Ended", "Saving logs...");

    /// The attendance file could not be created
    pub const FILE_ERROR: Screen = ("File Error!", "Try again");

    /// No local time is available to name the attendance file
    pub const CLOCK_ERROR: Screen = ("Clock Error!", "Try again");

    /// Title above the card recorded in the attendance file
    pub const EVENT_LOGGED: &'static str = "Event Log:";

    /// The attendance entry could not be written
    pub const LOG_ERROR: Screen = ("Log Error!", "Try again");

    // ------------------------------------------------------------------
    // Wi-Fi
    // ------------------------------------------------------------------

    /// Title above the network about to be disconnected
    pub const WIFI_STATUS: &'static str = "Wi-Fi:";

    /// Credential entry happens on the operator console
    pub const WIFI_SETUP: Screen = ("Wi-Fi Setup", "See console");

    pub const WIFI_CONNECTED: Screen = ("Wi-Fi", "Connected");

    pub const WIFI_DISCONNECTED: Screen = ("Wi-Fi", "Disconnected");

    pub const WIFI_ERROR: Screen = ("Wi-Fi Error!", "Try again");
}
