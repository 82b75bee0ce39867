//! Transport configuration types.
//!
//! TOML-deserializable settings for the HTTP transport, with field defaults
//! and bounds validation.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{ApiFailure, PaystackError, Result};

/// HTTP transport configuration.
///
/// # Examples
///
/// ```toml
/// pool_max_idle_per_host = 20
/// timeout_secs = 15
/// connect_timeout_secs = 5
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HttpConfig {
    /// Maximum idle connections per host.
    #[serde(default = "default_pool_max_idle")]
    pub pool_max_idle_per_host: usize,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            pool_max_idle_per_host: default_pool_max_idle(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl HttpConfig {
    /// Validates configuration values are within acceptable bounds.
    ///
    /// # Errors
    ///
    /// Returns error if timeout values are outside valid ranges:
    /// - `timeout_secs`: must be 1-300 seconds
    /// - `connect_timeout_secs`: must be 1-60 seconds
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(PaystackError::Validation {
                failure: ApiFailure::new("timeout_secs must be between 1 and 300"),
                field_errors: std::collections::BTreeMap::new(),
            });
        }
        if self.connect_timeout_secs == 0 || self.connect_timeout_secs > 60 {
            return Err(PaystackError::Validation {
                failure: ApiFailure::new("connect_timeout_secs must be between 1 and 60"),
                field_errors: std::collections::BTreeMap::new(),
            });
        }
        Ok(())
    }

    /// Returns the request timeout as a Duration.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Returns the connect timeout as a Duration.
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

fn default_pool_max_idle() -> usize {
    10
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_connect_timeout_secs() -> u64 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_config_default() {
        let config = HttpConfig::default();
        assert_eq!(config.pool_max_idle_per_host, 10);
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.connect_timeout_secs, 5);
    }

    #[test]
    fn test_http_config_durations() {
        let config = HttpConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.connect_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_http_config_from_toml() {
        let toml = "
            pool_max_idle_per_host = 20
            timeout_secs = 45
            connect_timeout_secs = 15
        ";

        let config: HttpConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.pool_max_idle_per_host, 20);
        assert_eq!(config.timeout_secs, 45);
        assert_eq!(config.connect_timeout_secs, 15);
    }

    #[test]
    fn test_http_config_toml_defaults() {
        let config: HttpConfig = toml::from_str("timeout_secs = 60").unwrap();
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.pool_max_idle_per_host, 10); // default
        assert_eq!(config.connect_timeout_secs, 5); // default
    }

    #[test]
    fn test_http_config_empty_toml() {
        let config: HttpConfig = toml::from_str("").unwrap();
        assert_eq!(config, HttpConfig::default());
    }

    #[test]
    fn test_http_config_invalid_toml() {
        let result: std::result::Result<HttpConfig, _> = toml::from_str("timeout_secs = \"soon\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_default() {
        assert!(HttpConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bounds() {
        let config = HttpConfig { timeout_secs: 1, connect_timeout_secs: 1, ..Default::default() };
        assert!(config.validate().is_ok());

        let config =
            HttpConfig { timeout_secs: 300, connect_timeout_secs: 60, ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_timeout_zero() {
        let config = HttpConfig { timeout_secs: 0, ..Default::default() };
        assert!(matches!(config.validate().unwrap_err(), PaystackError::Validation { .. }));
    }

    #[test]
    fn test_validate_timeout_too_large() {
        let config = HttpConfig { timeout_secs: 301, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_connect_timeout_zero() {
        let config = HttpConfig { connect_timeout_secs: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_connect_timeout_too_large() {
        let config = HttpConfig { connect_timeout_secs: 61, ..Default::default() };
        assert!(config.validate().is_err());
    }
}
