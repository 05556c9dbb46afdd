//! Alerting configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Alerting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertingConfig {
    /// Enable alerting
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Webhook that receives alerts as JSON
    #[serde(default)]
    pub webhook_url: Option<String>,
    /// Webhook delivery timeout in seconds
    #[serde(default = "default_timeout")]
    pub webhook_timeout: u64,
}

impl Default for AlertingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            webhook_url: None,
            webhook_timeout: default_timeout(),
        }
    }
}

impl AlertingConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.webhook_timeout)
    }
}
