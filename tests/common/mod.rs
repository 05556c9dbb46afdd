//! Common test utilities for health-monitor
//!
//! # Usage
//!
//! ```rust
//! use crate::common::{config_for, mount_all_healthy};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let server = wiremock::MockServer::start().await;
//!     mount_all_healthy(&server).await;
//!     let config = config_for(&server.uri());
//!     // ...
//! }
//! ```

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use health_monitor::config::Config;
use health_monitor::{ComponentHealth, HealthProbe, HealthStatus};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Skip test if environment variable is not set
#[macro_export]
macro_rules! skip_without_env {
    ($var:expr) => {
        if std::env::var($var).is_err() {
            eprintln!("Skipping test: {} environment variable not set", $var);
            return;
        }
    };
}

/// Probe that always reports `status` and counts its invocations
#[derive(Debug, Clone)]
pub struct StaticProbe {
    name: &'static str,
    status: HealthStatus,
    calls: Arc<AtomicUsize>,
}

impl StaticProbe {
    pub fn new(name: &'static str, status: HealthStatus) -> Self {
        Self {
            name,
            status,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn healthy(name: &'static str) -> Self {
        Self::new(name, HealthStatus::Healthy)
    }

    pub fn unhealthy(name: &'static str) -> Self {
        Self::new(name, HealthStatus::Unhealthy)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl HealthProbe for StaticProbe {
    fn name(&self) -> &str {
        self.name
    }

    async fn check(&self) -> ComponentHealth {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.status {
            HealthStatus::Healthy => ComponentHealth::healthy(self.name, Duration::from_millis(5)),
            HealthStatus::Unhealthy => {
                ComponentHealth::unhealthy(self.name, "connection refused", None)
            }
            HealthStatus::Unknown => ComponentHealth::unknown(self.name, "not configured"),
        }
    }
}

/// Configuration whose HTTP services all point at `base_url`.
///
/// Database and cache are left unconfigured so they report `unknown`.
pub fn config_for(base_url: &str) -> Config {
    let mut config = Config::default();
    config.services.node_url = Some(base_url.to_string());
    config.services.api_gateway_url = Some(base_url.to_string());
    config.services.indexer_url = Some(base_url.to_string());
    config.services.liquidity_url = Some(base_url.to_string());
    config.services.stablecoin_url = Some(base_url.to_string());
    config.services.database_url = None;
    config.services.redis_url = None;
    config.monitor.probe_timeout = 2;
    config.alerting.webhook_timeout = 2;
    config
}

/// Serve a healthy node root and a `/health` body carrying every detail field
pub async fn mount_all_healthy(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chain_id": 1,
            "ledger_version": "1234567"
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "uptime": 3600,
            "version": "1.4.2",
            "last_block": 987654,
            "events_processed": 42,
            "total_deposited": "1500000",
            "total_yield": "3250",
            "usdc_balance": "250000"
        })))
        .mount(server)
        .await;
}
