//! Alert manager implementation

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, error, warn};

use super::channels::{NotificationChannel, WebhookChannel};
use super::types::{Alert, AlertSeverity, AlertStats};
use crate::config::AlertingConfig;
use crate::utils::error::Result;

/// Logs alerts and forwards them to the configured notification channels.
///
/// Delivery is best effort: a failing channel is logged and counted, never
/// reported to the caller.
#[derive(Debug, Clone)]
pub struct AlertManager {
    /// Whether alerting is enabled at all
    enabled: bool,
    /// Notification channels
    channels: Vec<Arc<dyn NotificationChannel>>,
    /// Delivery statistics
    stats: Arc<Mutex<AlertStats>>,
}

impl AlertManager {
    /// Create a new alert manager
    pub fn new(config: &AlertingConfig) -> Result<Self> {
        let mut manager = Self {
            enabled: config.enabled,
            channels: Vec::new(),
            stats: Arc::new(Mutex::new(AlertStats::default())),
        };

        // Add webhook channel if configured
        if let Some(webhook_url) = &config.webhook_url {
            let client = reqwest::Client::builder()
                .timeout(config.timeout())
                .build()?;
            manager = manager.with_channel(WebhookChannel::new(
                webhook_url.clone(),
                client,
                config.timeout(),
            ));
        }

        Ok(manager)
    }

    /// An alert manager that drops every alert
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            channels: Vec::new(),
            stats: Arc::new(Mutex::new(AlertStats::default())),
        }
    }

    pub fn with_channel<C: NotificationChannel + 'static>(mut self, channel: C) -> Self {
        self.channels.push(Arc::new(channel));
        self
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Send an alert.
    ///
    /// No-op when alerting is disabled. Otherwise the alert is always logged
    /// and then delivered to each channel in turn.
    pub async fn send_alert(&self, message: &str, severity: AlertSeverity) {
        if !self.enabled {
            debug!("Alerting disabled, dropping alert: {}", message);
            return;
        }

        let alert = Alert::new(message, severity);
        warn!("ALERT [{}]: {}", severity.as_str().to_uppercase(), message);

        {
            let mut stats = self.stats.lock();
            stats.total_alerts += 1;
            stats.last_alert = Some(alert.timestamp);
        }

        for channel in &self.channels {
            if let Err(e) = channel.send(&alert).await {
                error!("Failed to send alert via {}: {}", channel.name(), e);
                self.stats.lock().failed_notifications += 1;
            }
        }
    }

    /// Get alert statistics
    pub fn stats(&self) -> AlertStats {
        self.stats.lock().clone()
    }
}
