//! Mock operator console fed through a channel.

use super::lock;
use crate::{HardwareError, Result, traits::OperatorConsole};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// A line shown on the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleLine {
    Prompt(String),
    Notice(String),
}

/// Mock operator console.
///
/// Prompts are answered with lines sent through the [`MockConsoleHandle`].
/// Everything shown is recorded, and optionally echoed to stdout for the
/// host binary.
#[derive(Debug)]
pub struct MockConsole {
    input_rx: mpsc::Receiver<String>,
    transcript: Arc<Mutex<Vec<ConsoleLine>>>,
    echo: bool,
}

impl MockConsole {
    pub fn new() -> (Self, MockConsoleHandle) {
        let (input_tx, input_rx) = mpsc::channel(32);
        let transcript = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                input_rx,
                transcript: Arc::clone(&transcript),
                echo: false,
            },
            MockConsoleHandle {
                input_tx,
                transcript,
            },
        )
    }

    /// Print prompts and notices to stdout as well.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    fn record(&self, line: ConsoleLine) {
        if self.echo {
            let (ConsoleLine::Prompt(text) | ConsoleLine::Notice(text)) = &line;
            println!("{text}");
        }
        lock(&self.transcript).push(line);
    }
}

impl OperatorConsole for MockConsole {
    async fn prompt(&mut self, prompt: &str) -> Result<String> {
        self.record(ConsoleLine::Prompt(prompt.to_string()));
        self.input_rx
            .recv()
            .await
            .ok_or_else(|| HardwareError::disconnected("Operator console closed"))
    }

    async fn notify(&mut self, message: &str) -> Result<()> {
        self.record(ConsoleLine::Notice(message.to_string()));
        Ok(())
    }
}

/// Handle for typing into a [`MockConsole`] and reading its transcript.
#[derive(Debug, Clone)]
pub struct MockConsoleHandle {
    input_tx: mpsc::Sender<String>,
    transcript: Arc<Mutex<Vec<ConsoleLine>>>,
}

impl MockConsoleHandle {
    /// Queue one line of operator input.
    ///
    /// # Errors
    ///
    /// Returns an error if the console has been dropped.
    pub async fn type_line(&self, line: impl Into<String>) -> Result<()> {
        self.input_tx
            .send(line.into())
            .await
            .map_err(|_| HardwareError::disconnected("Operator console closed"))
    }

    /// Everything shown so far, oldest first.
    pub fn transcript(&self) -> Vec<ConsoleLine> {
        lock(&self.transcript).clone()
    }

    /// Prompt texts shown so far.
    pub fn prompts(&self) -> Vec<String> {
        self.filter(|line| match line {
            ConsoleLine::Prompt(text) => Some(text.clone()),
            ConsoleLine::Notice(_) => None,
        })
    }

    /// Notices shown so far.
    pub fn notices(&self) -> Vec<String> {
        self.filter(|line| match line {
            ConsoleLine::Notice(text) => Some(text.clone()),
            ConsoleLine::Prompt(_) => None,
        })
    }

    fn filter(&self, f: impl Fn(&ConsoleLine) -> Option<String>) -> Vec<String> {
        lock(&self.transcript).iter().filter_map(f).collect()
    }
}
