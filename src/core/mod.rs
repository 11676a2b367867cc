//! Core business logic abstractions

pub mod config;
pub mod currency;
pub mod error;
pub mod format;
pub mod goal;
pub mod log;
pub mod progress;
pub mod stats;
pub mod tracker;
pub mod validation;

// Re-export main types for cleaner imports
pub use currency::{Currency, ExchangeRate, ExchangeRateProvider, convert_currency};
pub use error::{GoalError, RateError};
pub use goal::{Contribution, ContributionId, Goal, GoalId, GoalView};
pub use progress::calculate_progress;
pub use stats::{PortfolioStats, overall_progress, total_saved, total_target};
pub use tracker::SavingsTracker;
pub use validation::{parse_amount, validate_amount, validate_goal_name};
