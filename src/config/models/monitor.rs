//! Monitoring loop configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Monitoring loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Seconds to sleep between cycles
    #[serde(default = "default_check_interval")]
    pub check_interval: u64,
    /// Per-probe I/O timeout in seconds
    #[serde(default = "default_timeout")]
    pub probe_timeout: u64,
    /// Components whose absence from configuration counts as a failure
    #[serde(default)]
    pub required_components: Vec<String>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            check_interval: default_check_interval(),
            probe_timeout: default_timeout(),
            required_components: Vec::new(),
        }
    }
}

impl MonitorConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.check_interval)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout)
    }
}
