//! Portfolio-wide figures across goals, normalised to INR.
use crate::core::currency::{Currency, ExchangeRate, convert_currency};
use crate::core::goal::Goal;
use crate::core::progress::calculate_progress;

/// Sum of all targets in INR.
pub fn total_target(goals: &[Goal], rate: &ExchangeRate) -> f64 {
    goals
        .iter()
        .map(|g| convert_currency(g.target_amount(), g.currency(), Currency::Inr, rate))
        .sum()
}

/// Sum of all saved amounts in INR.
pub fn total_saved(goals: &[Goal], rate: &ExchangeRate) -> f64 {
    goals
        .iter()
        .map(|g| convert_currency(g.current_amount(), g.currency(), Currency::Inr, rate))
        .sum()
}

/// Mean of per-goal progress; 0 when there are no goals.
pub fn overall_progress(goals: &[Goal]) -> f64 {
    if goals.is_empty() {
        return 0.0;
    }
    let total: f64 = goals
        .iter()
        .map(|g| calculate_progress(g.current_amount(), g.target_amount()))
        .sum();
    total / goals.len() as f64
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioStats {
    pub total_target: f64,
    pub total_saved: f64,
    pub overall_progress: f64,
    pub goal_count: usize,
    pub achieved_count: usize,
}

impl PortfolioStats {
    pub fn compute(goals: &[Goal], rate: &ExchangeRate) -> Self {
        Self {
            total_target: total_target(goals, rate),
            total_saved: total_saved(goals, rate),
            overall_progress: overall_progress(goals),
            goal_count: goals.len(),
            achieved_count: goals.iter().filter(|g| g.is_achieved()).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn rate(inr: f64) -> ExchangeRate {
        ExchangeRate::new(inr, Local::now()).unwrap()
    }

    fn goal_with(target: f64, currency: Currency, saved: &[f64]) -> Goal {
        let mut goal = Goal::new("goal", target, currency, Local::now());
        for amount in saved {
            goal.add_contribution(*amount, Local::now());
        }
        goal
    }

    #[test]
    fn test_empty_goals() {
        let r = rate(83.0);
        assert_eq!(total_target(&[], &r), 0.0);
        assert_eq!(total_saved(&[], &r), 0.0);
        assert_eq!(overall_progress(&[]), 0.0);
    }

    #[test]
    fn test_mixed_currency_totals() {
        let r = rate(83.0);
        let goals = vec![
            goal_with(1000.0, Currency::Usd, &[100.0]),
            goal_with(50000.0, Currency::Inr, &[25000.0]),
        ];
        assert_eq!(total_target(&goals, &r), 133000.0);
        assert_eq!(total_saved(&goals, &r), 8300.0 + 25000.0);
    }

    #[test]
    fn test_overall_progress_is_mean() {
        let goals = vec![
            goal_with(100.0, Currency::Usd, &[50.0]),
            goal_with(100.0, Currency::Inr, &[250.0]),
            goal_with(100.0, Currency::Inr, &[]),
        ];
        // 50 + 100 (capped) + 0
        assert_eq!(overall_progress(&goals), 50.0);
    }

    #[test]
    fn test_portfolio_stats() {
        let r = rate(83.0);
        let goals = vec![
            goal_with(10.0, Currency::Usd, &[10.0]),
            goal_with(830.0, Currency::Inr, &[]),
        ];
        let stats = PortfolioStats::compute(&goals, &r);
        assert_eq!(stats.total_target, 1660.0);
        assert_eq!(stats.total_saved, 830.0);
        assert_eq!(stats.overall_progress, 50.0);
        assert_eq!(stats.goal_count, 2);
        assert_eq!(stats.achieved_count, 1);
    }
}
