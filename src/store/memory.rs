use crate::core::currency::Currency;
use crate::core::error::GoalError;
use crate::core::goal::{Goal, GoalId};
use crate::store::{GoalStore, check_contribution, check_new_goal};
use chrono::{DateTime, Local};
use tracing::debug;

type Clock = Box<dyn Fn() -> DateTime<Local> + Send + Sync>;

/// In-memory goal store. Goals live until the store is dropped.
pub struct MemoryGoalStore {
    goals: Vec<Goal>,
    clock: Clock,
}

impl MemoryGoalStore {
    /// Creates an empty store using the system clock.
    pub fn new() -> Self {
        Self::with_clock(Local::now)
    }

    /// Creates an empty store that reads "now" from `clock`.
    pub fn with_clock<F>(clock: F) -> Self
    where
        F: Fn() -> DateTime<Local> + Send + Sync + 'static,
    {
        Self {
            goals: Vec::new(),
            clock: Box::new(clock),
        }
    }
}

impl std::fmt::Debug for MemoryGoalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryGoalStore")
            .field("goals", &self.goals)
            .finish_non_exhaustive()
    }
}

impl Default for MemoryGoalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GoalStore for MemoryGoalStore {
    fn create_goal(
        &mut self,
        name: &str,
        target_amount: f64,
        currency: Currency,
    ) -> Result<Goal, GoalError> {
        check_new_goal(name, target_amount)?;

        let goal = Goal::new(name, target_amount, currency, (self.clock)());
        debug!("Goal STORE {}", goal.id());
        self.goals.insert(0, goal.clone());
        Ok(goal)
    }

    fn record_contribution(
        &mut self,
        goal_id: GoalId,
        amount: f64,
        date: DateTime<Local>,
    ) -> Result<Goal, GoalError> {
        let now = (self.clock)();
        let goal = self
            .goals
            .iter_mut()
            .find(|g| g.id() == goal_id)
            .ok_or(GoalError::NotFound(goal_id))?;
        check_contribution(amount, date, now)?;

        let contribution = goal.add_contribution(amount, date);
        debug!("Contribution STORE {} for goal {}", contribution.id, goal_id);
        Ok(goal.clone())
    }

    fn goal(&self, id: GoalId) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id() == id)
    }

    fn goals(&self) -> &[Goal] {
        &self.goals
    }
}
