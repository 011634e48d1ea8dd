//! Peripheral bundle consumed by the terminal.
//!
//! A [`Platform`] names one concrete type per capability. The device build,
//! the host binary and the test harness each define their own.

use tagkeeper_hardware::{
    ButtonPad, Clock, OperatorConsole, RfidReader, StatusLed, TextDisplay, WifiRadio,
};
use tagkeeper_storage::FileStore;

/// The set of peripheral types a terminal runs on.
pub trait Platform {
    type Reader: RfidReader;
    type Buttons: ButtonPad;
    type Display: TextDisplay;
    type Led: StatusLed;
    type Clock: Clock;
    type Radio: WifiRadio;
    type Console: OperatorConsole;
    type Files: FileStore;
}

/// One instance of every peripheral of a [`Platform`].
pub struct Peripherals<P: Platform> {
    pub reader: P::Reader,
    pub buttons: P::Buttons,
    pub display: P::Display,
    pub led: P::Led,
    pub clock: P::Clock,
    pub radio: P::Radio,
    pub console: P::Console,
    pub files: P::Files,
}
