//! Currency conversion abstractions

use crate::core::error::RateError;
use async_trait::async_trait;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// INR per USD used until a live rate has been fetched.
pub const DEFAULT_INR_RATE: f64 = 83.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "USD", alias = "usd")]
    Usd,
    #[serde(rename = "INR", alias = "inr")]
    Inr,
}

impl Currency {
    /// The other member of the pair.
    pub fn other(&self) -> Currency {
        match self {
            Currency::Usd => Currency::Inr,
            Currency::Inr => Currency::Usd,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Inr => "INR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Inr => "₹",
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "INR" => Ok(Currency::Inr),
            _ => Err(anyhow::anyhow!("Unsupported currency: {}", s)),
        }
    }
}

/// USD/INR exchange rate. USD is the reference unit.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRate {
    inr: f64,
    last_updated: DateTime<Local>,
}

impl ExchangeRate {
    /// Builds a rate, rejecting anything that is not a positive finite number.
    pub fn new(inr: f64, last_updated: DateTime<Local>) -> Result<Self, RateError> {
        if !inr.is_finite() || inr <= 0.0 {
            return Err(RateError::InvalidRate(inr));
        }
        Ok(Self { inr, last_updated })
    }

    pub fn usd(&self) -> f64 {
        1.0
    }

    /// Units of INR per 1 USD.
    pub fn inr(&self) -> f64 {
        self.inr
    }

    pub fn last_updated(&self) -> DateTime<Local> {
        self.last_updated
    }
}

impl Default for ExchangeRate {
    fn default() -> Self {
        Self {
            inr: DEFAULT_INR_RATE,
            last_updated: Local::now(),
        }
    }
}

/// Converts `amount` from one currency to the other.
///
/// Same-currency conversion returns `amount` untouched.
pub fn convert_currency(amount: f64, from: Currency, to: Currency, rate: &ExchangeRate) -> f64 {
    match (from, to) {
        (Currency::Usd, Currency::Inr) => amount * rate.inr(),
        (Currency::Inr, Currency::Usd) => amount / rate.inr(),
        _ => amount,
    }
}

/// Source of live exchange rates.
#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    async fn fetch_rate(&self) -> Result<ExchangeRate, RateError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(inr: f64) -> ExchangeRate {
        ExchangeRate::new(inr, Local::now()).unwrap()
    }

    #[test]
    fn test_convert_identity() {
        let r = rate(83.0);
        assert_eq!(convert_currency(123.45, Currency::Usd, Currency::Usd, &r), 123.45);
        assert_eq!(convert_currency(0.1, Currency::Inr, Currency::Inr, &r), 0.1);
    }

    #[test]
    fn test_convert_usd_to_inr_and_back() {
        let r = rate(83.0);
        assert_eq!(convert_currency(1000.0, Currency::Usd, Currency::Inr, &r), 83000.0);
        assert_eq!(convert_currency(8300.0, Currency::Inr, Currency::Usd, &r), 100.0);
    }

    #[test]
    fn test_convert_round_trip() {
        let r = rate(83.4567);
        for x in [0.01, 1.0, 999.99, 123456.789, 1e9] {
            let inr = convert_currency(x, Currency::Usd, Currency::Inr, &r);
            let back = convert_currency(inr, Currency::Inr, Currency::Usd, &r);
            assert!((back - x).abs() <= x * 1e-12, "{x} -> {back}");
        }
    }

    #[test]
    fn test_exchange_rate_rejects_invalid() {
        assert_eq!(
            ExchangeRate::new(0.0, Local::now()),
            Err(RateError::InvalidRate(0.0))
        );
        assert!(ExchangeRate::new(-1.0, Local::now()).is_err());
        assert!(ExchangeRate::new(f64::INFINITY, Local::now()).is_err());
        assert!(ExchangeRate::new(f64::NAN, Local::now()).is_err());
    }

    #[test]
    fn test_default_rate() {
        let r = ExchangeRate::default();
        assert_eq!(r.usd(), 1.0);
        assert_eq!(r.inr(), DEFAULT_INR_RATE);
    }

    #[test]
    fn test_currency_parse_and_display() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!(" INR ".parse::<Currency>().unwrap(), Currency::Inr);
        assert!("EUR".parse::<Currency>().is_err());
        assert_eq!(Currency::Inr.to_string(), "INR");
        assert_eq!(Currency::Usd.other(), Currency::Inr);
    }

    #[test]
    fn test_currency_serde() {
        let c: Currency = serde_yaml::from_str("INR").unwrap();
        assert_eq!(c, Currency::Inr);
        assert_eq!(serde_json::to_string(&Currency::Usd).unwrap(), "\"USD\"");
    }
}
