//! Storage of goals and their contributions.
//!
//! [`GoalStore`] is the only way to mutate goals. Implementations must run
//! [`check_new_goal`] and [`check_contribution`] before touching state so the
//! domain rules hold regardless of the backing store.
pub mod memory;

use crate::core::currency::Currency;
use crate::core::error::GoalError;
use crate::core::goal::{Goal, GoalId};
use crate::core::validation::{
    MAX_AMOUNT, MAX_GOAL_NAME_LEN, is_valid_amount, validate_goal_name,
};
use chrono::{DateTime, Local};

pub use memory::MemoryGoalStore;

pub trait GoalStore {
    /// Adds a goal with nothing saved yet and returns it.
    fn create_goal(
        &mut self,
        name: &str,
        target_amount: f64,
        currency: Currency,
    ) -> Result<Goal, GoalError>;

    /// Appends a contribution to `goal_id` and returns the updated goal.
    fn record_contribution(
        &mut self,
        goal_id: GoalId,
        amount: f64,
        date: DateTime<Local>,
    ) -> Result<Goal, GoalError>;

    fn goal(&self, id: GoalId) -> Option<&Goal>;

    /// All goals, most recently created first.
    fn goals(&self) -> &[Goal];

    fn len(&self) -> usize {
        self.goals().len()
    }

    fn is_empty(&self) -> bool {
        self.goals().is_empty()
    }
}

pub fn check_new_goal(name: &str, target_amount: f64) -> Result<(), GoalError> {
    if !validate_goal_name(name) {
        return Err(GoalError::Validation(format!(
            "Goal name must be 1-{MAX_GOAL_NAME_LEN} characters"
        )));
    }
    check_amount(target_amount)
}

/// Validates a contribution against the calendar day of `now`.
///
/// Any time on today's date is accepted, up to 23:59:59.999.
pub fn check_contribution(
    amount: f64,
    date: DateTime<Local>,
    now: DateTime<Local>,
) -> Result<(), GoalError> {
    check_amount(amount)?;
    if date.date_naive() > now.date_naive() {
        return Err(GoalError::Validation(
            "Date cannot be in the future".to_string(),
        ));
    }
    Ok(())
}

fn check_amount(amount: f64) -> Result<(), GoalError> {
    if !is_valid_amount(amount) {
        return Err(GoalError::Validation(format!(
            "Amount must be greater than 0 and at most {MAX_AMOUNT}, got {amount}"
        )));
    }
    Ok(())
}
