//! Human readable renderings of amounts, dates and rates.
use crate::core::currency::{Currency, ExchangeRate};
use chrono::{DateTime, TimeZone};

/// Formats `amount` without fraction digits, grouped the way each currency
/// is conventionally written: `₹1,23,45,678` and `$12,345,678`.
pub fn format_currency(amount: f64, currency: Currency) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    let grouped = match currency {
        Currency::Inr => group_indian(&digits),
        Currency::Usd => group_western(&digits),
    };
    format!("{sign}{}{grouped}", currency.symbol())
}

fn group_western(digits: &str) -> String {
    insert_commas(digits, 3, 3)
}

// Last three digits, then pairs: 12,34,567
fn group_indian(digits: &str) -> String {
    insert_commas(digits, 3, 2)
}

fn insert_commas(digits: &str, first: usize, rest: usize) -> String {
    if digits.len() <= first {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - first);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > rest {
        groups.push(&head[end - rest..end]);
        end -= rest;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

/// Formats a timestamp like `Oct 16, 2026, 03:04 PM`.
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// One line summary of the current rate, e.g. `1 USD = ₹83.00`.
pub fn format_rate(rate: &ExchangeRate) -> String {
    format!("1 USD = {}{:.2}", Currency::Inr.symbol(), rate.inr())
}

/// Progress with one decimal, e.g. `37.5%`.
pub fn format_progress(progress: f64) -> String {
    format!("{progress:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, Utc};

    #[test]
    fn test_format_inr_grouping() {
        assert_eq!(format_currency(0.0, Currency::Inr), "₹0");
        assert_eq!(format_currency(999.0, Currency::Inr), "₹999");
        assert_eq!(format_currency(1000.0, Currency::Inr), "₹1,000");
        assert_eq!(format_currency(123456.0, Currency::Inr), "₹1,23,456");
        assert_eq!(format_currency(12345678.4, Currency::Inr), "₹1,23,45,678");
    }

    #[test]
    fn test_format_usd_grouping() {
        assert_eq!(format_currency(12.6, Currency::Usd), "$13");
        assert_eq!(format_currency(1234567.0, Currency::Usd), "$1,234,567");
        assert_eq!(format_currency(100000.0, Currency::Usd), "$100,000");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_currency(-1500.0, Currency::Usd), "-$1,500");
    }

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2026, 10, 6, 15, 4, 0).unwrap();
        assert_eq!(format_date(&date), "Oct 6, 2026, 03:04 PM");
    }

    #[test]
    fn test_format_rate_and_progress() {
        let rate = ExchangeRate::new(83.456, Local::now()).unwrap();
        assert_eq!(format_rate(&rate), "1 USD = ₹83.46");
        assert_eq!(format_progress(12.34), "12.3%");
        assert_eq!(format_progress(100.0), "100.0%");
    }
}
