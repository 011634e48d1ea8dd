//! Mock status indicator.

use super::lock;
use crate::{Result, traits::StatusLed, types::LedColor};
use std::sync::{Arc, Mutex};

#[derive(Debug)]
struct LedState {
    current: LedColor,
    history: Vec<LedColor>,
}

/// Mock grant/deny indicator that records every state it is driven to.
#[derive(Debug)]
pub struct MockLed {
    state: Arc<Mutex<LedState>>,
}

impl MockLed {
    /// Create a new mock indicator, initially off.
    pub fn new() -> (Self, MockLedHandle) {
        let state = Arc::new(Mutex::new(LedState {
            current: LedColor::Off,
            history: Vec::new(),
        }));
        (
            Self {
                state: Arc::clone(&state),
            },
            MockLedHandle { state },
        )
    }
}

impl StatusLed for MockLed {
    async fn set_led(&mut self, color: LedColor) -> Result<()> {
        let mut state = lock(&self.state);
        state.current = color;
        state.history.push(color);
        Ok(())
    }
}

/// Inspection handle for a [`MockLed`].
#[derive(Debug, Clone)]
pub struct MockLedHandle {
    state: Arc<Mutex<LedState>>,
}

impl MockLedHandle {
    /// Current indicator state.
    pub fn current(&self) -> LedColor {
        lock(&self.state).current
    }

    /// Every state set so far, oldest first.
    pub fn history(&self) -> Vec<LedColor> {
        lock(&self.state).history.clone()
    }

    /// Forget the recorded history.
    pub fn clear_history(&self) {
        lock(&self.state).history.clear();
    }
}
