//! Tagkeeper terminal simulator.
//!
//! Runs the access terminal against simulated peripherals. Records are kept
//! in the configured data directory; see [`host`] for the input commands.

mod host;
mod logging;

use anyhow::Context;
use tagkeeper_terminal::{Terminal, TerminalConfig};
use tokio::io::BufReader;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init()?;

    let config = TerminalConfig::from_env().context("loading configuration")?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        data_dir = %config.data_dir.display(),
        "Starting Tagkeeper"
    );

    let (peripherals, controls) = host::build(&config).await?;
    let mut terminal = Terminal::open(peripherals, &config).await?;

    println!("{}", host::USAGE);
    let router = tokio::spawn(controls.route(BufReader::new(tokio::io::stdin())));
    let interrupted = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    let (result, controls) = host::supervise(terminal.run(), router, interrupted).await;
    terminal.farewell().await?;
    drop(controls);
    result
}
