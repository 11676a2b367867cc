use chrono::Local;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::core::currency::{ExchangeRate, ExchangeRateProvider};
use crate::core::error::RateError;
use crate::providers::util::with_retry;
use async_trait::async_trait;

// ExchangeRateApiProvider implementation for ExchangeRateProvider
pub struct ExchangeRateApiProvider {
    base_url: String,
    api_key: String,
    retries: usize,
    retry_delay_ms: u64,
}

impl ExchangeRateApiProvider {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        ExchangeRateApiProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            retries: 0,
            retry_delay_ms: 0,
        }
    }

    /// Retries transport failures `retries` times, `delay_ms` apart.
    pub fn with_retries(mut self, retries: usize, delay_ms: u64) -> Self {
        self.retries = retries;
        self.retry_delay_ms = delay_ms;
        self
    }
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    result: String,
    #[serde(rename = "error-type")]
    error_type: Option<String>,
    conversion_rates: Option<HashMap<String, f64>>,
}

fn unavailable(msg: impl Into<String>) -> RateError {
    RateError::Unavailable(msg.into())
}

#[async_trait]
impl ExchangeRateProvider for ExchangeRateApiProvider {
    #[instrument(name = "ExchangeRateFetch", skip(self), fields(base_url = %self.base_url))]
    async fn fetch_rate(&self) -> Result<ExchangeRate, RateError> {
        let url = format!("{}/v6/{}/latest/USD", self.base_url, self.api_key);
        debug!("Requesting USD rates");

        let client = reqwest::Client::builder()
            .user_agent("savetrack/1.0")
            .build()
            .map_err(|e| unavailable(format!("Client error: {e}")))?;

        let response = with_retry(|| client.get(&url).send(), self.retries, self.retry_delay_ms)
            .await
            .map_err(|e| unavailable(format!("Request error: {e}")))?;

        if !response.status().is_success() {
            return Err(unavailable(format!("HTTP error: {}", response.status())));
        }

        let text = response
            .text()
            .await
            .map_err(|e| unavailable(format!("Failed to read response: {e}")))?;

        let data: LatestRatesResponse = serde_json::from_str(&text)
            .map_err(|e| unavailable(format!("Failed to parse JSON response: {e}")))?;

        if data.result != "success" {
            return Err(unavailable(format!(
                "Upstream reported {}: {}",
                data.result,
                data.error_type.as_deref().unwrap_or("unknown error")
            )));
        }

        let inr = data
            .conversion_rates
            .as_ref()
            .and_then(|rates| rates.get("INR"))
            .copied()
            .ok_or_else(|| unavailable("No INR rate in response"))?;

        let rate = ExchangeRate::new(inr, Local::now())
            .map_err(|e| unavailable(format!("Bad INR rate in response: {e}")))?;
        debug!(inr, "Received exchange rate");
        Ok(rate)
    }
}
