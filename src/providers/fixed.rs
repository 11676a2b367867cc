use crate::core::currency::{ExchangeRate, ExchangeRateProvider};
use crate::core::error::RateError;
use async_trait::async_trait;
use chrono::Local;

/// Serves a constant INR rate, stamped with the time of each fetch.
pub struct FixedRateProvider {
    inr: f64,
}

impl FixedRateProvider {
    pub fn new(inr: f64) -> Self {
        FixedRateProvider { inr }
    }
}

#[async_trait]
impl ExchangeRateProvider for FixedRateProvider {
    async fn fetch_rate(&self) -> Result<ExchangeRate, RateError> {
        ExchangeRate::new(self.inr, Local::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_rate() {
        let rate = FixedRateProvider::new(83.5).fetch_rate().await.unwrap();
        assert_eq!(rate.inr(), 83.5);
    }

    #[tokio::test]
    async fn test_fixed_rate_invalid() {
        let result = FixedRateProvider::new(0.0).fetch_rate().await;
        assert_eq!(result, Err(RateError::InvalidRate(0.0)));
    }
}
