//! Configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use thiserror::Error;

/// Default health-check URL shown in primary outage alerts.
pub const DEFAULT_HEALTH_CHECK_URL: &str = "https://know.jordanpartridge.us/health";

/// Default production URL shown in failover alerts.
pub const DEFAULT_PRODUCTION_URL: &str = "https://know.jordanpartridge.us";

/// Default name of the backup instance.
pub const DEFAULT_BACKUP_INSTANCE: &str = "gentle-garden";

/// Log output format for the handler binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" | "" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidLogFormat(other.to_string())),
        }
    }
}

/// Alert formatter configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertConfig {
    /// Health-check URL included in primary outage alerts.
    pub health_check_url: String,
    /// Production URL included in failover alerts.
    pub production_url: String,
    /// Backup instance name included in secondary outage alerts.
    pub backup_instance: String,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            health_check_url: DEFAULT_HEALTH_CHECK_URL.to_string(),
            production_url: DEFAULT_PRODUCTION_URL.to_string(),
            backup_instance: DEFAULT_BACKUP_INSTANCE.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl AlertConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `KNOW_HEALTH_CHECK_URL` | Health-check URL in primary alerts | `https://know.jordanpartridge.us/health` |
    /// | `KNOW_PRODUCTION_URL` | Production URL in failover alerts | `https://know.jordanpartridge.us` |
    /// | `KNOW_BACKUP_INSTANCE` | Backup instance name | `gentle-garden` |
    /// | `ALERT_LOG_FORMAT` | `pretty` or `json` | `pretty` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let health_check_url = lookup("KNOW_HEALTH_CHECK_URL")
            .unwrap_or_else(|| DEFAULT_HEALTH_CHECK_URL.to_string());
        validate_url("KNOW_HEALTH_CHECK_URL", &health_check_url)?;

        let production_url = lookup("KNOW_PRODUCTION_URL")
            .unwrap_or_else(|| DEFAULT_PRODUCTION_URL.to_string());
        validate_url("KNOW_PRODUCTION_URL", &production_url)?;

        let backup_instance = lookup("KNOW_BACKUP_INSTANCE")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BACKUP_INSTANCE.to_string());

        let log_format = match lookup("ALERT_LOG_FORMAT") {
            Some(value) => value.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            health_check_url,
            production_url,
            backup_instance,
            log_format,
        })
    }
}

fn validate_url(variable: &'static str, url: &str) -> Result<(), ConfigError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidUrl {
            variable,
            value: url.to_string(),
        })
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{variable} must be an http(s) URL, got {value:?}")]
    InvalidUrl {
        variable: &'static str,
        value: String,
    },

    #[error("Invalid ALERT_LOG_FORMAT: {0} (expected pretty or json)")]
    InvalidLogFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AlertConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AlertConfig::default());
        assert_eq!(config.health_check_url, "https://know.jordanpartridge.us/health");
        assert_eq!(config.backup_instance, "gentle-garden");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_overrides() {
        let config = AlertConfig::from_lookup(lookup_from(&[
            ("KNOW_HEALTH_CHECK_URL", "http://localhost:8000/health"),
            ("KNOW_PRODUCTION_URL", "https://staging.example.com"),
            ("KNOW_BACKUP_INSTANCE", "quiet-meadow"),
            ("ALERT_LOG_FORMAT", "JSON"),
        ]))
        .unwrap();

        assert_eq!(config.health_check_url, "http://localhost:8000/health");
        assert_eq!(config.production_url, "https://staging.example.com");
        assert_eq!(config.backup_instance, "quiet-meadow");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_url() {
        let err = AlertConfig::from_lookup(lookup_from(&[("KNOW_PRODUCTION_URL", "ftp://x")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidUrl { variable: "KNOW_PRODUCTION_URL", .. }
        ));
    }

    #[test]
    fn test_blank_backup_instance_uses_default() {
        let config =
            AlertConfig::from_lookup(lookup_from(&[("KNOW_BACKUP_INSTANCE", "  ")])).unwrap();
        assert_eq!(config.backup_instance, DEFAULT_BACKUP_INSTANCE);
    }

    #[test]
    fn test_invalid_log_format() {
        let err = "xml".parse::<LogFormat>().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogFormat(ref v) if v == "xml"));
    }
}
