use crate::core::currency::Currency;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

pub const DEFAULT_EXCHANGE_RATE_API_URL: &str = "https://v6.exchangerate-api.com";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ContributionConfig {
    pub amount: f64,
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GoalConfig {
    pub name: String,
    pub target: f64,
    pub currency: Currency,
    #[serde(default)]
    pub contributions: Vec<ContributionConfig>,
}

fn default_base_url() -> String {
    DEFAULT_EXCHANGE_RATE_API_URL.to_string()
}

fn default_retries() -> usize {
    2
}

fn default_retry_delay_ms() -> u64 {
    500
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExchangeRateApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub api_key: String,
    #[serde(default = "default_retries")]
    pub retries: usize,
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

/// Constant rate source for offline use.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FixedRateConfig {
    pub inr: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ProvidersConfig {
    pub exchange_rate_api: Option<ExchangeRateApiConfig>,
    pub fixed: Option<FixedRateConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub goals: Vec<GoalConfig>,
    #[serde(default)]
    pub providers: ProvidersConfig,
    /// INR per USD used until a live rate is fetched.
    pub exchange_rate: Option<f64>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("in", "savetrack", "savetrack")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
goals:
  - name: "Trip to Japan"
    target: 100000
    currency: INR
    contributions:
      - amount: 30000
        date: 2026-01-15
      - amount: 2500.5
        date: 2026-02-01
  - name: "New laptop"
    target: 1500
    currency: USD
providers:
  exchange_rate_api:
    base_url: "http://example.com"
    api_key: "secret"
exchange_rate: 84.5
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.goals.len(), 2);
        assert_eq!(config.goals[0].name, "Trip to Japan");
        assert_eq!(config.goals[0].currency, Currency::Inr);
        assert_eq!(
            config.goals[0].contributions,
            vec![
                ContributionConfig {
                    amount: 30000.0,
                    date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
                },
                ContributionConfig {
                    amount: 2500.5,
                    date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
                },
            ]
        );
        assert_eq!(config.goals[1].currency, Currency::Usd);
        assert!(config.goals[1].contributions.is_empty());

        let api = config.providers.exchange_rate_api.unwrap();
        assert_eq!(api.base_url, "http://example.com");
        assert_eq!(api.api_key, "secret");
        assert_eq!(api.retries, 2);
        assert_eq!(api.retry_delay_ms, 500);
        assert_eq!(config.exchange_rate, Some(84.5));
    }

    #[test]
    fn test_config_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").unwrap();
        assert!(config.goals.is_empty());
        assert!(config.providers.exchange_rate_api.is_none());
        assert!(config.providers.fixed.is_none());
        assert!(config.exchange_rate.is_none());
    }

    #[test]
    fn test_exchange_rate_api_defaults() {
        let yaml_str = r#"
providers:
  exchange_rate_api:
    api_key: "secret"
  fixed:
    inr: 83.25
"#;
        let config: AppConfig = serde_yaml::from_str(yaml_str).unwrap();
        let api = config.providers.exchange_rate_api.unwrap();
        assert_eq!(api.base_url, DEFAULT_EXCHANGE_RATE_API_URL);
        assert_eq!(config.providers.fixed.unwrap().inr, 83.25);
    }

    #[test]
    fn test_config_rejects_unknown_currency() {
        let yaml_str = r#"
goals:
  - name: "Holiday"
    target: 100
    currency: EUR
"#;
        assert!(serde_yaml::from_str::<AppConfig>(yaml_str).is_err());
    }

    #[test]
    fn test_load_from_missing_path() {
        let result = AppConfig::load_from_path("/definitely/not/here.yaml");
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read config file")
        );
    }
}
