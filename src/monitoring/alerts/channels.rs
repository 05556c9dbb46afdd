//! Notification channel implementations

use std::time::Duration;

use super::types::Alert;
use crate::utils::error::{MonitorError, Result};

/// Notification channel trait
#[async_trait::async_trait]
pub trait NotificationChannel: Send + Sync + std::fmt::Debug {
    /// Send a notification
    async fn send(&self, alert: &Alert) -> Result<()>;

    /// Get channel name
    fn name(&self) -> &str;
}

/// Posts alerts as JSON to a webhook endpoint
#[derive(Debug, Clone)]
pub struct WebhookChannel {
    webhook_url: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl WebhookChannel {
    /// Create a new webhook notification channel
    pub fn new(webhook_url: String, client: reqwest::Client, timeout: Duration) -> Self {
        Self {
            webhook_url,
            client,
            timeout,
        }
    }
}

#[async_trait::async_trait]
impl NotificationChannel for WebhookChannel {
    async fn send(&self, alert: &Alert) -> Result<()> {
        let response = self
            .client
            .post(&self.webhook_url)
            .timeout(self.timeout)
            .json(alert)
            .send()
            .await
            .map_err(|e| MonitorError::alert(format!("Failed to send webhook notification: {}", e)))?;

        if !response.status().is_success() {
            return Err(MonitorError::alert(format!(
                "Webhook returned status: {}",
                response.status()
            )));
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "webhook"
    }
}
