//! Alert types and data structures

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Alert severity levels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Info,
    #[default]
    Warning,
    Critical,
}

impl AlertSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Info => "info",
            AlertSeverity::Warning => "warning",
            AlertSeverity::Critical => "critical",
        }
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single alert raised by the monitor; serializes as the webhook body
#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    /// Short title, e.g. `[CRITICAL] Platform Health Check Alert`
    #[serde(rename = "text")]
    pub title: String,
    /// Alert body
    pub message: String,
    /// Severity
    pub severity: AlertSeverity,
    /// When the alert was raised
    pub timestamp: DateTime<Utc>,
}

impl Alert {
    pub fn new(message: impl Into<String>, severity: AlertSeverity) -> Self {
        Self {
            title: format!(
                "[{}] Platform Health Check Alert",
                severity.as_str().to_uppercase()
            ),
            message: message.into(),
            severity,
            timestamp: Utc::now(),
        }
    }
}

/// Alert statistics
#[derive(Debug, Default, Clone)]
pub struct AlertStats {
    /// Alerts raised while alerting was enabled
    pub total_alerts: u64,
    /// Deliveries that failed on some channel
    pub failed_notifications: u64,
    /// Last alert timestamp
    pub last_alert: Option<DateTime<Utc>>,
}
