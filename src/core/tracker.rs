//! Single owner of the goal store and the current exchange rate.
//!
//! All mutation goes through `&mut self`; the tracker is meant to live on one
//! task and is never shared behind a lock.
use crate::core::currency::{Currency, ExchangeRate, ExchangeRateProvider};
use crate::core::error::{GoalError, RateError};
use crate::core::goal::{Goal, GoalId, GoalView};
use crate::core::stats::PortfolioStats;
use crate::store::{GoalStore, MemoryGoalStore};
use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

#[derive(Debug)]
pub struct SavingsTracker<S: GoalStore = MemoryGoalStore> {
    store: S,
    rate: ExchangeRate,
}

impl SavingsTracker<MemoryGoalStore> {
    pub fn in_memory() -> Self {
        Self::new(MemoryGoalStore::new(), ExchangeRate::default())
    }
}

impl<S: GoalStore> SavingsTracker<S> {
    pub fn new(store: S, rate: ExchangeRate) -> Self {
        Self { store, rate }
    }

    pub fn create_goal(
        &mut self,
        name: &str,
        target_amount: f64,
        currency: Currency,
    ) -> Result<Goal, GoalError> {
        let goal = self.store.create_goal(name, target_amount, currency)?;
        info!(
            goal_id = %goal.id(),
            name = goal.name(),
            target = target_amount,
            %currency,
            "Created goal"
        );
        Ok(goal)
    }

    pub fn record_contribution(
        &mut self,
        goal_id: GoalId,
        amount: f64,
        date: DateTime<Local>,
    ) -> Result<Goal, GoalError> {
        let completes = self.would_complete(goal_id, amount).unwrap_or(false);
        let goal = self
            .store
            .record_contribution(goal_id, amount, date)
            .inspect_err(|e| warn!(%goal_id, error = %e, "Contribution rejected"))?;
        info!(
            %goal_id,
            amount,
            current = goal.current_amount(),
            "Recorded contribution"
        );
        if completes {
            info!(%goal_id, name = goal.name(), "Goal reached");
        }
        Ok(goal)
    }

    /// Whether contributing `amount` would take `goal_id` to its target.
    ///
    /// `None` when the goal does not exist.
    pub fn would_complete(&self, goal_id: GoalId, amount: f64) -> Option<bool> {
        self.store.goal(goal_id).map(|g| g.would_complete(amount))
    }

    /// Replaces the current rate wholesale.
    pub fn set_exchange_rate(&mut self, rate: ExchangeRate) {
        debug!(inr = rate.inr(), "Exchange rate updated");
        self.rate = rate;
    }

    pub fn exchange_rate(&self) -> &ExchangeRate {
        &self.rate
    }

    /// Fetches a new rate from `provider`.
    ///
    /// On failure the last known rate stays in place and the error is
    /// returned for the caller to report.
    pub async fn refresh_rate(
        &mut self,
        provider: &dyn ExchangeRateProvider,
    ) -> Result<&ExchangeRate, RateError> {
        match provider.fetch_rate().await {
            Ok(rate) => {
                self.set_exchange_rate(rate);
                Ok(&self.rate)
            }
            Err(e) => {
                warn!(error = %e, inr = self.rate.inr(), "Keeping last known exchange rate");
                Err(e)
            }
        }
    }

    pub fn goal(&self, id: GoalId) -> Option<&Goal> {
        self.store.goal(id)
    }

    pub fn goals(&self) -> &[Goal] {
        self.store.goals()
    }

    pub fn goal_views(&self) -> Vec<GoalView> {
        self.goals()
            .iter()
            .map(|g| GoalView::new(g, &self.rate))
            .collect()
    }

    pub fn stats(&self) -> PortfolioStats {
        PortfolioStats::compute(self.goals(), &self.rate)
    }
}
