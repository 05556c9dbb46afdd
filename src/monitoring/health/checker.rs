//! Core health checker implementation

use std::collections::HashSet;
use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, info, warn};

use super::probe::ProbeRegistry;
use super::types::{ComponentHealth, HealthStatus, SystemHealth};
use crate::config::Config;
use crate::utils::error::{MonitorError, Result};

/// Runs every registered probe and reduces the results into one snapshot
#[derive(Debug, Clone)]
pub struct HealthChecker {
    /// Probes to run each cycle
    registry: Arc<ProbeRegistry>,
    /// Components that may not be left unconfigured
    required: Arc<HashSet<String>>,
}

impl HealthChecker {
    /// Create a new health checker
    pub fn new(registry: ProbeRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            required: Arc::new(HashSet::new()),
        }
    }

    /// Create the standard checker for a configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let registry = ProbeRegistry::from_config(config)?;
        Ok(Self::new(registry).with_required_components(
            config.monitor.required_components.iter().cloned(),
        ))
    }

    /// Treat an unconfigured component in `names` as unhealthy
    pub fn with_required_components<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let required: HashSet<String> = names.into_iter().map(Into::into).collect();
        for name in self.registry.unknown_names(&required) {
            warn!("Required component '{}' has no registered probe", name);
        }
        self.required = Arc::new(required);
        self
    }

    pub fn registry(&self) -> &ProbeRegistry {
        &self.registry
    }

    /// Check all components.
    ///
    /// Probes run concurrently, one task each. A probe task that panics breaks
    /// the probe contract and fails the whole cycle.
    pub async fn check_all(&self) -> Result<SystemHealth> {
        info!("Starting health checks...");
        let timestamp = chrono::Utc::now();

        let handles: Vec<_> = self
            .registry
            .iter()
            .map(|probe| {
                let probe = Arc::clone(probe);
                tokio::spawn(async move { probe.check().await })
            })
            .collect();
        let results = join_all(handles).await;

        let mut components = Vec::with_capacity(results.len());
        for (probe, result) in self.registry.iter().zip(results) {
            let mut health = result.map_err(|e| {
                MonitorError::monitoring(format!("{} probe failed: {}", probe.name(), e))
            })?;
            health.name = probe.name().to_string();
            debug!(
                "Component {} is {}{}",
                health.name,
                health.status,
                health
                    .error
                    .as_deref()
                    .map(|e| format!(" ({})", e))
                    .unwrap_or_default()
            );
            components.push(self.apply_required(health));
        }

        let health_status = SystemHealth::from_components(timestamp, components);
        info!(
            "Health checks completed. Overall status: {}",
            health_status.overall_status
        );
        Ok(health_status)
    }

    fn apply_required(&self, mut health: ComponentHealth) -> ComponentHealth {
        if health.status == HealthStatus::Unknown && self.required.contains(&health.name) {
            health.status = HealthStatus::Unhealthy;
            health.error = Some(format!(
                "{} (required)",
                health.error.as_deref().unwrap_or("not configured")
            ));
        }
        health
    }
}
