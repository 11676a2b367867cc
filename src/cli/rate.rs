use super::ui;
use crate::core::currency::ExchangeRate;
use crate::core::error::RateError;
use crate::core::format::{format_date, format_rate};

/// Renders the exchange rate line, noting when a refresh failed.
pub fn render(rate: &ExchangeRate, refresh_error: Option<&RateError>) -> String {
    let mut output = format!(
        "{} {}  {}",
        ui::style_text("Exchange Rate:", ui::StyleType::TotalLabel),
        format_rate(rate),
        ui::style_text(
            &format!("Last updated: {}", format_date(&rate.last_updated())),
            ui::StyleType::Subtle
        )
    );
    if let Some(e) = refresh_error {
        output.push('\n');
        output.push_str(&ui::style_text(
            &format!("Could not fetch the latest rate ({e}); showing last known rate."),
            ui::StyleType::Error,
        ));
    }
    output
}

pub fn run(rate: &ExchangeRate, refresh_error: Option<&RateError>) {
    println!("{}", render(rate, refresh_error));
}
