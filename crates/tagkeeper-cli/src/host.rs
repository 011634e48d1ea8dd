//! Simulated peripherals for running the terminal on a workstation.
//!
//! The display and operator console print to stdout. Cards, button presses
//! and console answers are typed on stdin, one command per line:
//!
//! ```text
//! card <id>      present a card to the reader
//! up | down | enter (or u | d | e)
//! type <text>    answer the operator console
//! ```

use anyhow::{Context, bail};
use tagkeeper_core::CardId;
use tagkeeper_hardware::mock::{
    MockButtons, MockButtonsHandle, MockConsole, MockConsoleHandle, MockLed, MockRadio, MockRfid,
    MockRfidHandle,
};
use tagkeeper_hardware::{Button, SystemClock};
use tagkeeper_storage::DirectoryStore;
use tagkeeper_terminal::{Peripherals, Platform, TerminalConfig, VirtualDisplay};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

pub const USAGE: &str = "Commands: card <id> | up | down | enter | type <text>";

/// Peripherals backed by stdin/stdout, the system clock and a data directory.
pub struct HostPlatform;

impl Platform for HostPlatform {
    type Reader = MockRfid;
    type Buttons = MockButtons;
    type Display = VirtualDisplay;
    type Led = MockLed;
    type Clock = SystemClock;
    type Radio = MockRadio;
    type Console = MockConsole;
    type Files = DirectoryStore;
}

/// The input side of the simulated peripherals.
pub struct HostControls {
    pub cards: MockRfidHandle,
    pub buttons: MockButtonsHandle,
    pub console: MockConsoleHandle,
}

/// Build the host peripherals described by `config`.
///
/// The simulated radio knows the networks listed in the configuration.
pub async fn build(
    config: &TerminalConfig,
) -> anyhow::Result<(Peripherals<HostPlatform>, HostControls)> {
    let files = DirectoryStore::open(&config.data_dir)
        .await
        .with_context(|| format!("opening data directory {}", config.data_dir.display()))?;
    let clock = SystemClock::new(config.utc_offset_secs)?;

    let (reader, cards) = MockRfid::with_name("Host reader".to_string());
    let (buttons, button_handle) = MockButtons::new();
    let (led, _led) = MockLed::new();
    let (radio, radio_handle) = MockRadio::new();
    let (console, console_handle) = MockConsole::new();

    for network in &config.networks {
        radio_handle.add_network(&network.ssid, &network.password);
    }
    info!(networks = config.networks.len(), "Simulated radio ready");

    let peripherals = Peripherals {
        reader,
        buttons,
        display: VirtualDisplay::builder().with_echo(true).build(),
        led,
        clock,
        radio,
        console: console.with_echo(true),
        files,
    };
    let controls = HostControls {
        cards,
        buttons: button_handle,
        console: console_handle,
    };
    Ok((peripherals, controls))
}

/// One line of host input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    Card(CardId),
    Press(Button),
    Type(String),
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> anyhow::Result<Option<HostCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "card" => HostCommand::Card(CardId::new(rest)?),
        "type" => HostCommand::Type(rest.to_string()),
        _ => match Button::from_command(word) {
            Some(button) if rest.is_empty() => HostCommand::Press(button),
            _ => bail!("Unknown command: {line}"),
        },
    };
    Ok(Some(command))
}

impl HostControls {
    /// Feed one command to the simulated peripherals.
    pub async fn apply(&self, command: HostCommand) -> anyhow::Result<()> {
        debug!(?command, "Host input");
        match command {
            HostCommand::Card(card) => self.cards.present_id(&card).await?,
            HostCommand::Press(button) => self.buttons.press(button).await?,
            HostCommand::Type(text) => self.console.type_line(text).await?,
        }
        Ok(())
    }

    /// Route input lines until end of input, then hand the controls back.
    ///
    /// The peripherals stay connected for as long as the caller holds the
    /// returned controls.
    pub async fn route<R>(self, input: R) -> anyhow::Result<Self>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            match parse_command(&line) {
                Ok(Some(command)) => self.apply(command).await?,
                Ok(None) => {}
                Err(e) => {
                    warn!("{e}");
                    println!("{USAGE}");
                }
            }
        }
        info!("End of input");
        Ok(self)
    }
}

/// Drive the terminal until it stops or `shutdown` resolves.
///
/// End of input does not stop the terminal; the controls returned by the
/// router are kept and handed back.
pub async fn supervise<T, R, S>(
    run: R,
    mut router: JoinHandle<anyhow::Result<T>>,
    shutdown: S,
) -> (anyhow::Result<()>, Option<T>)
where
    R: Future<Output = tagkeeper_terminal::Result<()>>,
    S: Future<Output = ()>,
{
    tokio::pin!(run);
    tokio::pin!(shutdown);
    let mut kept = None;
    let mut input_open = true;

    let result = loop {
        tokio::select! {
            result = &mut run => break result.context("terminal stopped"),
            () = &mut shutdown => {
                info!("Interrupted");
                break Ok(());
            }
            routed = &mut router, if input_open => {
                input_open = false;
                match routed {
                    Ok(Ok(controls)) => {
                        info!("Input closed, press Ctrl-C to exit");
                        kept = Some(controls);
                    }
                    Ok(Err(e)) => break Err(e.context("reading input")),
                    Err(e) => break Err(e.into()),
                }
            }
        }
    };

    if input_open {
        router.abort();
    }
    (result, kept)
}
