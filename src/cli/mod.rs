//! Terminal front-end over the savings tracker.
pub mod rate;
pub mod setup;
pub mod summary;
pub mod ui;

use crate::core::config::AppConfig;
use crate::core::currency::{ExchangeRate, ExchangeRateProvider};
use crate::core::tracker::SavingsTracker;
use crate::providers::{ExchangeRateApiProvider, FixedRateProvider};
use crate::store::MemoryGoalStore;
use anyhow::{Context, Result};
use chrono::{Local, NaiveTime, TimeZone};
use tracing::debug;

/// Builds a tracker holding the goals and contributions listed in `config`.
///
/// Every entry goes through the same validation as interactive input.
pub fn load_tracker(config: &AppConfig) -> Result<SavingsTracker> {
    let rate = match config.exchange_rate {
        Some(inr) => ExchangeRate::new(inr, Local::now())
            .context("Invalid exchange_rate in configuration")?,
        None => ExchangeRate::default(),
    };
    let mut tracker = SavingsTracker::new(MemoryGoalStore::new(), rate);

    for goal_config in &config.goals {
        let goal = tracker
            .create_goal(&goal_config.name, goal_config.target, goal_config.currency)
            .with_context(|| format!("Invalid goal '{}'", goal_config.name))?;

        for contribution in &goal_config.contributions {
            let date = Local
                .from_local_datetime(&contribution.date.and_time(NaiveTime::MIN))
                .earliest()
                .with_context(|| format!("Invalid local date {}", contribution.date))?;
            tracker
                .record_contribution(goal.id(), contribution.amount, date)
                .with_context(|| {
                    format!(
                        "Invalid contribution of {} on {} to goal '{}'",
                        contribution.amount, contribution.date, goal_config.name
                    )
                })?;
        }
    }
    debug!("Loaded {} goals from config", tracker.goals().len());
    Ok(tracker)
}

/// The configured rate source, if any. The HTTP API wins over a fixed rate.
pub fn rate_provider(config: &AppConfig) -> Option<Box<dyn ExchangeRateProvider>> {
    if let Some(api) = &config.providers.exchange_rate_api {
        return Some(Box::new(
            ExchangeRateApiProvider::new(&api.base_url, &api.api_key)
                .with_retries(api.retries, api.retry_delay_ms),
        ));
    }
    config
        .providers
        .fixed
        .as_ref()
        .map(|fixed| Box::new(FixedRateProvider::new(fixed.inr)) as Box<dyn ExchangeRateProvider>)
}
