//! Error kinds surfaced by the savings core.

use crate::core::goal::GoalId;
use thiserror::Error;

/// Failures of the goal store mutators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GoalError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Goal not found: {0}")]
    NotFound(GoalId),
}

/// Failures at the exchange rate boundary.
///
/// None of these are fatal: callers keep using the last known rate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RateError {
    #[error("Exchange rate unavailable: {0}")]
    Unavailable(String),
    #[error("Invalid exchange rate: {0}")]
    InvalidRate(f64),
}
