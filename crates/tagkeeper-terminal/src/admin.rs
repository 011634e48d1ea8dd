//! The admin menu, opened by a privileged card.

use crate::error::Result;
use crate::menu::{AdminOption, MenuOption, MenuOutcome};
use crate::messages::DisplayMessages;
use crate::platform::Platform;
use crate::terminal::Terminal;
use tagkeeper_network::WifiError;
use tracing::{error, info};

impl<P: Platform> Terminal<P> {
    /// Browse the admin menu and run at most one selected option.
    ///
    /// The highlighted option is remembered for the next visit. An idle
    /// timeout returns without changing anything.
    pub async fn admin_menu(&mut self) -> Result<MenuOutcome<AdminOption>> {
        let outcome = self
            .admin_menu
            .run(&mut self.input, &mut self.display)
            .await?;

        match outcome {
            MenuOutcome::TimedOut => {
                info!("Admin menu timed out");
                self.flash(DisplayMessages::ADMIN_TIMEOUT).await?;
            }
            MenuOutcome::Selected(option) => {
                info!(?option, "Admin option selected");
                self.show(DisplayMessages::SELECTED, option.label()).await?;
                self.hold(self.timings.message_hold).await;
                self.dispatch_admin(option).await?;
            }
        }

        Ok(outcome)
    }

    async fn dispatch_admin(&mut self, option: AdminOption) -> Result<()> {
        match option {
            AdminOption::WriteMode => {
                self.write_mode().await?;
            }
            AdminOption::ViewLogs => self.view_logs().await?,
            AdminOption::WifiSetup => self.wifi_setup().await?,
            AdminOption::EventsMode => {
                self.events_menu().await?;
            }
            AdminOption::Return => self.flash(DisplayMessages::RETURNING).await?,
        }
        Ok(())
    }

    /// Toggle the Wi-Fi link.
    ///
    /// When associated, the network name is shown and the link is torn down
    /// (forgetting the credential). Otherwise the credential ladder runs on
    /// the operator console until a connection is made.
    pub async fn wifi_setup(&mut self) -> Result<()> {
        if self.wifi.is_connected() {
            let ssid = self.state.credential.ssid().to_string();
            self.show(DisplayMessages::WIFI_STATUS, &ssid).await?;
            self.hold(self.timings.wifi_status_hold()).await;

            match self
                .wifi
                .disconnect(&mut self.state.credential, &self.store)
                .await
            {
                Ok(()) => self.flash(DisplayMessages::WIFI_DISCONNECTED).await?,
                Err(e) => self.report_wifi_error(e).await?,
            }
        } else {
            self.show_screen(DisplayMessages::WIFI_SETUP).await?;

            match self
                .wifi
                .connect(&mut self.state.credential, &self.store)
                .await
            {
                Ok(outcome) => {
                    info!(%outcome, "Wi-Fi setup finished");
                    self.flash(DisplayMessages::WIFI_CONNECTED).await?;
                }
                Err(e) => self.report_wifi_error(e).await?,
            }
        }
        Ok(())
    }

    async fn report_wifi_error(&mut self, e: WifiError) -> Result<()> {
        error!("Wi-Fi setup failed: {}", e);
        self.flash(DisplayMessages::WIFI_ERROR).await
    }
}
