//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;
use crate::domain::timing::Duration;

/// Default remote API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.assemblyai.com/v2";

/// Default number of attempts for one status fetch
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 3;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub initial_delay: Option<String>,
    pub poll_interval: Option<String>,
    pub deadline: Option<String>,
    pub retry_attempts: Option<u32>,
    pub retry_backoff: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            base_url: Some(DEFAULT_BASE_URL.to_string()),
            initial_delay: Some(Duration::default_initial_delay().to_string()),
            poll_interval: Some(Duration::default_poll_interval().to_string()),
            deadline: Some(Duration::default_deadline().to_string()),
            retry_attempts: Some(DEFAULT_RETRY_ATTEMPTS),
            retry_backoff: Some(Duration::default_retry_backoff().to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            base_url: other.base_url.or(self.base_url),
            initial_delay: other.initial_delay.or(self.initial_delay),
            poll_interval: other.poll_interval.or(self.poll_interval),
            deadline: other.deadline.or(self.deadline),
            retry_attempts: other.retry_attempts.or(self.retry_attempts),
            retry_backoff: other.retry_backoff.or(self.retry_backoff),
        }
    }

    pub fn base_url_or_default(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn initial_delay(&self) -> Result<Duration, ConfigError> {
        parse_duration("initial_delay", &self.initial_delay, Duration::default_initial_delay())
    }

    pub fn poll_interval(&self) -> Result<Duration, ConfigError> {
        parse_duration("poll_interval", &self.poll_interval, Duration::default_poll_interval())
    }

    pub fn deadline(&self) -> Result<Duration, ConfigError> {
        parse_duration("deadline", &self.deadline, Duration::default_deadline())
    }

    pub fn retry_backoff(&self) -> Result<Duration, ConfigError> {
        parse_duration("retry_backoff", &self.retry_backoff, Duration::default_retry_backoff())
    }

    /// Get retry attempts, rejecting zero
    pub fn retry_attempts(&self) -> Result<u32, ConfigError> {
        match self.retry_attempts {
            Some(0) => Err(ConfigError::ValidationError {
                key: "retry_attempts".to_string(),
                message: "Value must be at least 1".to_string(),
            }),
            Some(n) => Ok(n),
            None => Ok(DEFAULT_RETRY_ATTEMPTS),
        }
    }
}

fn parse_duration(
    key: &str,
    value: &Option<String>,
    default: Duration,
) -> Result<Duration, ConfigError> {
    match value {
        Some(s) => s
            .parse::<Duration>()
            .map_err(|e| ConfigError::ValidationError {
                key: key.to_string(),
                message: e.to_string(),
            }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert!(config.api_key.is_none());
        assert_eq!(config.base_url.as_deref(), Some(DEFAULT_BASE_URL));
        assert_eq!(config.initial_delay.as_deref(), Some("3s"));
        assert_eq!(config.poll_interval.as_deref(), Some("3s"));
        assert_eq!(config.deadline.as_deref(), Some("5m"));
        assert_eq!(config.retry_attempts, Some(3));
        assert_eq!(config.retry_backoff.as_deref(), Some("1s"));
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.api_key.is_none());
        assert!(config.base_url.is_none());
        assert!(config.deadline.is_none());
        assert!(config.retry_attempts.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            api_key: Some("base_key".to_string()),
            deadline: Some("5m".to_string()),
            poll_interval: Some("3s".to_string()),
            ..Default::default()
        };

        let other = AppConfig {
            api_key: Some("other_key".to_string()),
            deadline: None,
            poll_interval: Some("10s".to_string()),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.api_key.as_deref(), Some("other_key"));
        assert_eq!(merged.deadline.as_deref(), Some("5m"));
        assert_eq!(merged.poll_interval.as_deref(), Some("10s"));
    }

    #[test]
    fn merge_preserves_base_when_other_is_empty() {
        let base = AppConfig::defaults();
        let merged = base.clone().merge(AppConfig::empty());
        assert_eq!(merged, base);
    }

    #[test]
    fn timing_values_parse() {
        let config = AppConfig {
            initial_delay: Some("500ms".to_string()),
            deadline: Some("2m".to_string()),
            ..Default::default()
        };
        assert_eq!(config.initial_delay().unwrap().as_millis(), 500);
        assert_eq!(config.deadline().unwrap().as_secs(), 120);
        assert_eq!(config.poll_interval().unwrap().as_secs(), 3);
        assert_eq!(config.retry_backoff().unwrap().as_secs(), 1);
    }

    #[test]
    fn invalid_timing_value_names_the_key() {
        let config = AppConfig {
            poll_interval: Some("soon".to_string()),
            ..Default::default()
        };
        match config.poll_interval() {
            Err(ConfigError::ValidationError { key, .. }) => assert_eq!(key, "poll_interval"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn retry_attempts_rejects_zero() {
        let config = AppConfig {
            retry_attempts: Some(0),
            ..Default::default()
        };
        assert!(config.retry_attempts().is_err());
        assert_eq!(AppConfig::empty().retry_attempts().unwrap(), 3);
    }

    #[test]
    fn base_url_or_default() {
        assert_eq!(AppConfig::empty().base_url_or_default(), DEFAULT_BASE_URL);
        let config = AppConfig {
            base_url: Some("http://localhost:9000".to_string()),
            ..Default::default()
        };
        assert_eq!(config.base_url_or_default(), "http://localhost:9000");
    }
}
