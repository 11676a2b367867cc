use super::ui;
use crate::core::currency::Currency;
use crate::core::error::RateError;
use crate::core::format::{format_currency, format_progress};
use crate::core::goal::GoalView;
use crate::core::stats::PortfolioStats;
use crate::core::tracker::SavingsTracker;
use crate::store::GoalStore;
use comfy_table::Cell;

impl GoalView {
    fn table_row(&self) -> Vec<Cell> {
        let remaining = if self.achieved {
            Cell::new("Goal achieved").fg(comfy_table::Color::Green)
        } else {
            ui::amount_cell(format_currency(self.remaining, self.currency))
        };

        vec![
            Cell::new(&self.name),
            ui::amount_cell(format_currency(self.target_amount, self.currency)),
            ui::amount_cell(format!(
                "≈ {}",
                format_currency(self.converted_target, self.currency.other())
            )),
            ui::amount_cell(format_currency(self.current_amount, self.currency)),
            remaining,
            ui::progress_cell(self.progress, format_progress(self.progress)),
            ui::amount_cell(self.contribution_count.to_string()),
            ui::format_optional_cell(self.last_contribution, |last| {
                format_currency(last, self.currency)
            }),
        ]
    }
}

impl PortfolioStats {
    pub fn display(&self) -> String {
        let line = |label: &str, value: String| {
            format!(
                "{}: {}\n",
                ui::style_text(label, ui::StyleType::TotalLabel),
                ui::style_text(&value, ui::StyleType::TotalValue)
            )
        };
        let mut output = String::new();
        output.push_str(&line(
            "Total Target",
            format_currency(self.total_target, Currency::Inr),
        ));
        output.push_str(&line(
            "Total Saved",
            format_currency(self.total_saved, Currency::Inr),
        ));
        output.push_str(&line(
            "Overall Progress",
            format_progress(self.overall_progress),
        ));
        output.push_str(&line(
            "Goals Achieved",
            format!("{}/{}", self.achieved_count, self.goal_count),
        ));
        output
    }
}

/// Renders the goal table followed by portfolio totals and the rate in use.
pub fn render<S: GoalStore>(
    tracker: &SavingsTracker<S>,
    refresh_error: Option<&RateError>,
) -> String {
    let mut output = format!("{}\n\n", ui::style_text("Savings Goals", ui::StyleType::Title));

    let views = tracker.goal_views();
    if views.is_empty() {
        output.push_str(&ui::style_text(
            "No goals yet. Add some to your configuration file.",
            ui::StyleType::Subtle,
        ));
        output.push('\n');
    } else {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Goal"),
            ui::header_cell("Target"),
            ui::header_cell("Converted"),
            ui::header_cell("Saved"),
            ui::header_cell("Remaining"),
            ui::header_cell("Progress"),
            ui::header_cell("Contributions"),
            ui::header_cell("Last"),
        ]);
        for view in &views {
            table.add_row(view.table_row());
        }
        output.push_str(&table.to_string());
        output.push_str("\n\n");
    }

    output.push_str(&tracker.stats().display());
    output.push('\n');
    output.push_str(&super::rate::render(tracker.exchange_rate(), refresh_error));
    output
}

pub fn run<S: GoalStore>(tracker: &SavingsTracker<S>, refresh_error: Option<&RateError>) {
    println!("{}", render(tracker, refresh_error));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::currency::ExchangeRate;
    use crate::store::MemoryGoalStore;
    use chrono::Local;

    fn tracker() -> SavingsTracker {
        SavingsTracker::new(
            MemoryGoalStore::new(),
            ExchangeRate::new(83.0, Local::now()).unwrap(),
        )
    }

    #[test]
    fn test_render_empty() {
        let output = console::strip_ansi_codes(&render(&tracker(), None)).to_string();
        assert!(output.contains("No goals yet"));
        assert!(output.contains("Total Target: ₹0"));
        assert!(output.contains("Overall Progress: 0.0%"));
        assert!(output.contains("Goals Achieved: 0/0"));
        assert!(output.contains("1 USD = ₹83.00"));
    }

    #[test]
    fn test_render_goals() {
        let mut tracker = tracker();
        let camera = tracker.create_goal("Camera", 1000.0, Currency::Usd).unwrap();
        tracker.create_goal("Scooter", 50000.0, Currency::Inr).unwrap();
        tracker
            .record_contribution(camera.id(), 1000.0, Local::now())
            .unwrap();

        let output = console::strip_ansi_codes(&render(&tracker, None)).to_string();
        assert!(output.contains("Camera"));
        assert!(output.contains("Scooter"));
        assert!(output.contains("≈ ₹83,000"));
        assert!(output.contains("Goal achieved"));
        assert!(output.contains("$1,000"));
        assert!(output.contains("Total Target: ₹1,33,000"));
        assert!(output.contains("Total Saved: ₹83,000"));
        assert!(output.contains("Overall Progress: 50.0%"));
        assert!(output.contains("Goals Achieved: 1/2"));
    }

    #[test]
    fn test_render_notes_failed_refresh() {
        let mut tracker = tracker();
        tracker.create_goal("Scooter", 50000.0, Currency::Inr).unwrap();
        let error = RateError::Unavailable("HTTP error: 503".to_string());

        let output = console::strip_ansi_codes(&render(&tracker, Some(&error))).to_string();
        assert!(output.contains("Exchange Rate: 1 USD = ₹83.00"));
        assert!(output.contains("Could not fetch the latest rate"));
        assert!(output.contains("HTTP error: 503"));

        let output = console::strip_ansi_codes(&render(&tracker, None)).to_string();
        assert!(!output.contains("Could not fetch the latest rate"));
    }
}
