use crate::loader::DataSource;
use std::env;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_DATA_SOURCE: &str = "data/laptops.json";
pub const DEFAULT_PREDICTION_URL: &str =
    "https://europe-southwest1-machinelearningproject-460413.cloudfunctions.net/get-price-prediction";
pub const DEFAULT_SIMILAR_URL: &str =
    "https://europe-southwest1-machinelearningproject-460413.cloudfunctions.net/get-k-similar-products";
pub const DEFAULT_TIMEOUT_SECS: u64 = 180;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a whole number of seconds, got '{value}'")]
    InvalidTimeout { var: &'static str, value: String },
}

/// Runtime settings, read from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_source: DataSource,
    pub prediction_url: String,
    pub similar_url: String,
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_source: DataSource::parse(DEFAULT_DATA_SOURCE),
            prediction_url: DEFAULT_PREDICTION_URL.to_string(),
            similar_url: DEFAULT_SIMILAR_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    pub const DATA_VAR: &'static str = "OFFERLENS_DATA";
    pub const PREDICTION_URL_VAR: &'static str = "OFFERLENS_PREDICTION_URL";
    pub const SIMILAR_URL_VAR: &'static str = "OFFERLENS_SIMILAR_URL";
    pub const TIMEOUT_VAR: &'static str = "OFFERLENS_TIMEOUT_SECS";

    /// Load `.env` if present, then read the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup, unset values use defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(data) = lookup(Self::DATA_VAR) {
            config.data_source = DataSource::parse(&data);
        }
        if let Some(url) = lookup(Self::PREDICTION_URL_VAR) {
            config.prediction_url = url;
        }
        if let Some(url) = lookup(Self::SIMILAR_URL_VAR) {
            config.similar_url = url;
        }
        if let Some(raw) = lookup(Self::TIMEOUT_VAR) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout {
                    var: Self::TIMEOUT_VAR,
                    value: raw.clone(),
                })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(
            config.data_source,
            DataSource::File("data/laptops.json".into())
        );
        assert_eq!(config.request_timeout, Duration::from_secs(180));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("OFFERLENS_DATA", "https://cdn.example.com/laptops.json"),
            ("OFFERLENS_PREDICTION_URL", "http://localhost:8080/predict"),
            ("OFFERLENS_TIMEOUT_SECS", " 30 "),
        ]))
        .unwrap();

        assert_eq!(
            config.data_source,
            DataSource::Url("https://cdn.example.com/laptops.json".to_string())
        );
        assert_eq!(config.prediction_url, "http://localhost:8080/predict");
        assert_eq!(config.similar_url, DEFAULT_SIMILAR_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_invalid_timeout() {
        let err = AppConfig::from_lookup(lookup_from(&[("OFFERLENS_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidTimeout {
                var: "OFFERLENS_TIMEOUT_SECS",
                value: "soon".to_string()
            }
        );
    }
}
