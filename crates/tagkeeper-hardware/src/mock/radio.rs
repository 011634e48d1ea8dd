//! Mock Wi-Fi radio with a table of reachable networks.

use super::lock;
use crate::{HardwareError, Result, traits::WifiRadio};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::{Arc, Mutex};

/// Address handed out on a successful association.
const MOCK_STATION_ADDRESS: Ipv4Addr = Ipv4Addr::new(192, 168, 1, 50);

#[derive(Debug, Default)]
struct RadioState {
    active: bool,
    networks: HashMap<String, String>,
    ssid: Option<String>,
    address: Option<Ipv4Addr>,
    unassigned_address: bool,
    attempts: Vec<String>,
}

/// Mock Wi-Fi radio.
///
/// `connect` succeeds at once when the SSID is known and the password
/// matches; otherwise the link stays down.
///
/// # Examples
///
/// ```
/// use tagkeeper_hardware::mock::MockRadio;
/// use tagkeeper_hardware::traits::WifiRadio;
///
/// #[tokio::main]
/// async fn main() -> tagkeeper_hardware::Result<()> {
///     let (mut radio, handle) = MockRadio::new();
///     handle.add_network("office", "secret");
///
///     radio.activate().await?;
///     radio.connect("office", "secret").await?;
///     assert!(radio.has_valid_link());
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct MockRadio {
    state: Arc<Mutex<RadioState>>,
}

impl MockRadio {
    /// Create a radio with no known networks.
    pub fn new() -> (Self, MockRadioHandle) {
        let state = Arc::new(Mutex::new(RadioState::default()));
        (
            Self {
                state: Arc::clone(&state),
            },
            MockRadioHandle { state },
        )
    }
}

impl WifiRadio for MockRadio {
    async fn activate(&mut self) -> Result<()> {
        lock(&self.state).active = true;
        Ok(())
    }

    async fn connect(&mut self, ssid: &str, password: &str) -> Result<()> {
        let mut state = lock(&self.state);
        if !state.active {
            return Err(HardwareError::communication("Wi-Fi radio not active"));
        }

        state.attempts.push(ssid.to_string());
        if state.networks.get(ssid).is_some_and(|pw| pw == password) {
            state.ssid = Some(ssid.to_string());
            state.address = Some(if state.unassigned_address {
                Ipv4Addr::UNSPECIFIED
            } else {
                MOCK_STATION_ADDRESS
            });
        } else {
            state.ssid = None;
            state.address = None;
        }
        Ok(())
    }

    async fn disconnect(&mut self) -> Result<()> {
        let mut state = lock(&self.state);
        state.ssid = None;
        state.address = None;
        Ok(())
    }

    async fn deactivate(&mut self) -> Result<()> {
        let mut state = lock(&self.state);
        state.active = false;
        state.ssid = None;
        state.address = None;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        lock(&self.state).ssid.is_some()
    }

    fn ip_address(&self) -> Option<Ipv4Addr> {
        lock(&self.state).address
    }

    fn ssid(&self) -> Option<String> {
        lock(&self.state).ssid.clone()
    }
}

/// Control handle for a [`MockRadio`].
#[derive(Debug, Clone)]
pub struct MockRadioHandle {
    state: Arc<Mutex<RadioState>>,
}

impl MockRadioHandle {
    /// Make a network reachable.
    pub fn add_network(&self, ssid: impl Into<String>, password: impl Into<String>) {
        lock(&self.state)
            .networks
            .insert(ssid.into(), password.into());
    }

    /// Associate immediately, as if the link came up before startup.
    pub fn force_link(&self, ssid: impl Into<String>) {
        let mut state = lock(&self.state);
        state.ssid = Some(ssid.into());
        state.address = Some(MOCK_STATION_ADDRESS);
    }

    /// Hand out `0.0.0.0` on the next associations.
    pub fn withhold_address(&self, withhold: bool) {
        lock(&self.state).unassigned_address = withhold;
    }

    /// SSIDs of every connect request, oldest first.
    pub fn attempts(&self) -> Vec<String> {
        lock(&self.state).attempts.clone()
    }

    pub fn is_connected(&self) -> bool {
        lock(&self.state).ssid.is_some()
    }

    pub fn is_active(&self) -> bool {
        lock(&self.state).active
    }
}
