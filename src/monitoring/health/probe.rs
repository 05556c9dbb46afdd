//! Probe contract and the registry of monitored components

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use super::components::{CacheProbe, DatabaseProbe, HttpProbe};
use super::types::ComponentHealth;
use crate::config::Config;
use crate::utils::error::Result;

/// A health check for one dependency.
///
/// `check` has no error channel: every transport failure, timeout or malformed
/// response must be folded into an `unhealthy` [`ComponentHealth`].
#[async_trait::async_trait]
pub trait HealthProbe: Send + Sync + std::fmt::Debug {
    /// Fixed component name
    fn name(&self) -> &str;

    /// Probe the dependency
    async fn check(&self) -> ComponentHealth;
}

/// Ordered set of probes, one per component name
#[derive(Debug, Clone, Default)]
pub struct ProbeRegistry {
    probes: Vec<Arc<dyn HealthProbe>>,
}

impl ProbeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the standard seven-component registry from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let timeout = config.monitor.timeout();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("health-monitor/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let services = &config.services;

        let registry = Self::new()
            .with_probe(HttpProbe::new(
                "node",
                "Node",
                services.node_url.clone(),
                "/v1",
                client.clone(),
                timeout,
            ))
            .with_probe(DatabaseProbe::new(services.database_url.clone(), timeout))
            .with_probe(CacheProbe::new(services.redis_url.clone(), timeout))
            .with_probe(
                HttpProbe::new(
                    "api_gateway",
                    "API Gateway",
                    services.api_gateway_url.clone(),
                    "/health",
                    client.clone(),
                    timeout,
                )
                .with_detail_fields(&["uptime", "version"]),
            )
            .with_probe(
                HttpProbe::new(
                    "indexer",
                    "Indexer",
                    services.indexer_url.clone(),
                    "/health",
                    client.clone(),
                    timeout,
                )
                .with_detail_fields(&["last_block", "events_processed"]),
            )
            .with_probe(
                HttpProbe::new(
                    "liquidity",
                    "Liquidity service",
                    services.liquidity_url.clone(),
                    "/health",
                    client.clone(),
                    timeout,
                )
                .with_detail_fields(&["total_deposited", "total_yield"]),
            )
            .with_probe(
                HttpProbe::new(
                    "stablecoin",
                    "Stablecoin service",
                    services.stablecoin_url.clone(),
                    "/health",
                    client,
                    timeout,
                )
                .with_detail_fields(&["usdc_balance"]),
            );

        debug!(components = ?registry.names(), "Probe registry built");
        Ok(registry)
    }

    /// Add a probe, replacing any probe already registered under its name
    pub fn register(&mut self, probe: Arc<dyn HealthProbe>) {
        match self.probes.iter().position(|p| p.name() == probe.name()) {
            Some(index) => self.probes[index] = probe,
            None => self.probes.push(probe),
        }
    }

    pub fn with_probe<P: HealthProbe + 'static>(mut self, probe: P) -> Self {
        self.register(Arc::new(probe));
        self
    }

    pub fn names(&self) -> Vec<&str> {
        self.probes.iter().map(|p| p.name()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.probes.iter().any(|p| p.name() == name)
    }

    pub fn len(&self) -> usize {
        self.probes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn HealthProbe>> {
        self.probes.iter()
    }

    /// Names the registry does not know about
    pub(crate) fn unknown_names<'a>(&self, names: &'a HashSet<String>) -> Vec<&'a str> {
        names
            .iter()
            .filter(|name| !self.contains(name))
            .map(String::as_str)
            .collect()
    }
}

/// Render a timeout for error messages
pub(crate) fn timeout_message(component: &str, timeout: Duration) -> String {
    format!(
        "{} check timed out after {:.1}s",
        component,
        timeout.as_secs_f64()
    )
}
