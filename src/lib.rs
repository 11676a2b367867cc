pub mod cli;
pub mod core;
pub mod providers;
pub mod store;

use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    Summary { offline: bool },
    Rate,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Savings tracker starting...");

    let config = match config_path {
        Some(path) => crate::core::config::AppConfig::load_from_path(path)?,
        None => crate::core::config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let mut tracker = cli::load_tracker(&config)?;
    let provider = cli::rate_provider(&config);

    match command {
        AppCommand::Summary { offline } => {
            let refresh_error = match &provider {
                Some(provider) if !offline => {
                    let pb = cli::ui::new_spinner("Fetching exchange rate...");
                    // Failure keeps the configured rate
                    let result = tracker.refresh_rate(provider.as_ref()).await.err();
                    pb.finish_and_clear();
                    result
                }
                _ => None,
            };
            cli::summary::run(&tracker, refresh_error.as_ref());
        }
        AppCommand::Rate => {
            let refresh_error = match &provider {
                Some(provider) => {
                    let pb = cli::ui::new_spinner("Fetching exchange rate...");
                    let result = tracker.refresh_rate(provider.as_ref()).await.err();
                    pb.finish_and_clear();
                    result
                }
                None => {
                    info!("No exchange rate provider configured");
                    None
                }
            };
            cli::rate::run(tracker.exchange_rate(), refresh_error.as_ref());
        }
    }
    Ok(())
}
