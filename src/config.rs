//! Intake Configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Env var naming the JSON config file
pub const CONFIG_PATH_ENV: &str = "FIXIT_CONFIG";
/// Env override for the listen address
pub const LISTEN_ADDR_ENV: &str = "FIXIT_LISTEN_ADDR";
/// Env override for the email endpoint
pub const NOTIFY_URL_ENV: &str = "FIXIT_NOTIFY_URL";
/// Env override for the email timeout
pub const NOTIFY_TIMEOUT_ENV: &str = "FIXIT_NOTIFY_TIMEOUT_SECS";

/// Intake service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    /// HTTP listen address
    pub listen_addr: String,
    /// Full URL of the email service endpoint; empty disables delivery
    pub notify_url: String,
    /// Ceiling for a single email call, seconds
    pub notify_timeout_secs: u64,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".into(),
            notify_url: String::new(),
            notify_timeout_secs: 10,
        }
    }
}

impl IntakeConfig {
    /// Load from file
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from an env-like lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup(LISTEN_ADDR_ENV) {
            self.listen_addr = addr;
        }
        if let Some(url) = lookup(NOTIFY_URL_ENV) {
            self.notify_url = url;
        }
        if let Some(raw) = lookup(NOTIFY_TIMEOUT_ENV) {
            self.notify_timeout_secs = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key: NOTIFY_TIMEOUT_ENV,
                value: raw.clone(),
            })?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.notify_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "notify_timeout_secs",
                value: "0".into(),
            });
        }
        Ok(())
    }

    /// Whether an email endpoint is set
    pub fn notify_configured(&self) -> bool {
        !self.notify_url.trim().is_empty()
    }

    pub fn notify_timeout(&self) -> Duration {
        Duration::from_secs(self.notify_timeout_secs)
    }
}
