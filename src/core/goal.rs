//! Savings goals and the contributions recorded against them.

use crate::core::currency::{Currency, ExchangeRate, convert_currency};
use crate::core::progress::calculate_progress;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GoalId(Uuid);

impl GoalId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GoalId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for GoalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GoalId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContributionId(Uuid);

impl ContributionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ContributionId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ContributionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    pub id: ContributionId,
    pub goal_id: GoalId,
    pub amount: f64,
    pub date: DateTime<Local>,
}

/// A named savings target.
///
/// Fields are read-only outside the crate: `current_amount` only moves
/// through [`Goal::add_contribution`], which keeps it equal to the sum of
/// `contributions`.
#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    id: GoalId,
    name: String,
    currency: Currency,
    target_amount: f64,
    current_amount: f64,
    contributions: Vec<Contribution>,
    created_at: DateTime<Local>,
}

impl Goal {
    pub(crate) fn new(
        name: &str,
        target_amount: f64,
        currency: Currency,
        created_at: DateTime<Local>,
    ) -> Self {
        Self {
            id: GoalId::new(),
            name: name.trim().to_string(),
            currency,
            target_amount,
            current_amount: 0.0,
            contributions: Vec::new(),
            created_at,
        }
    }

    pub(crate) fn add_contribution(&mut self, amount: f64, date: DateTime<Local>) -> &Contribution {
        self.current_amount += amount;
        self.contributions.push(Contribution {
            id: ContributionId::new(),
            goal_id: self.id,
            amount,
            date,
        });
        &self.contributions[self.contributions.len() - 1]
    }

    pub fn id(&self) -> GoalId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn target_amount(&self) -> f64 {
        self.target_amount
    }

    pub fn current_amount(&self) -> f64 {
        self.current_amount
    }

    /// Contributions in the order they were recorded.
    pub fn contributions(&self) -> &[Contribution] {
        &self.contributions
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn progress(&self) -> f64 {
        calculate_progress(self.current_amount, self.target_amount)
    }

    /// Amount still missing, never negative.
    pub fn remaining(&self) -> f64 {
        (self.target_amount - self.current_amount).max(0.0)
    }

    pub fn is_achieved(&self) -> bool {
        self.remaining() == 0.0
    }

    /// Whether contributing `amount` would reach the target.
    pub fn would_complete(&self, amount: f64) -> bool {
        !self.is_achieved() && self.current_amount + amount >= self.target_amount
    }
}

/// Display figures derived from a goal and the current rate.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalView {
    pub name: String,
    pub currency: Currency,
    pub target_amount: f64,
    pub current_amount: f64,
    pub progress: f64,
    pub remaining: f64,
    /// Target expressed in the other currency of the pair.
    pub converted_target: f64,
    pub contribution_count: usize,
    pub last_contribution: Option<f64>,
    pub achieved: bool,
}

impl GoalView {
    pub fn new(goal: &Goal, rate: &ExchangeRate) -> Self {
        let currency = goal.currency();
        Self {
            name: goal.name().to_string(),
            currency,
            target_amount: goal.target_amount(),
            current_amount: goal.current_amount(),
            progress: goal.progress(),
            remaining: goal.remaining(),
            converted_target: convert_currency(
                goal.target_amount(),
                currency,
                currency.other(),
                rate,
            ),
            contribution_count: goal.contributions().len(),
            last_contribution: goal.contributions().last().map(|c| c.amount),
            achieved: goal.is_achieved(),
        }
    }
}
