//! Redis probe

use std::time::{Duration, Instant};

use redis::AsyncCommands;
use tracing::debug;

use crate::monitoring::health::probe::{HealthProbe, timeout_message};
use crate::monitoring::health::types::ComponentHealth;
use crate::utils::error::Result;

const PROBE_KEY: &str = "health_check";
const PROBE_VALUE: &str = "test";
const PROBE_TTL_SECS: u64 = 60;

/// Writes, reads back and deletes a short-lived key on a fresh connection
#[derive(Debug, Clone)]
pub struct CacheProbe {
    url: Option<String>,
    timeout: Duration,
}

impl CacheProbe {
    pub fn new(url: Option<String>, timeout: Duration) -> Self {
        Self { url, timeout }
    }

    /// Returns whether the value read back matched the value written
    async fn round_trip(url: &str) -> Result<bool> {
        let client = redis::Client::open(url)?;
        let mut conn = client.get_multiplexed_async_connection().await?;

        let _: () = conn.set_ex(PROBE_KEY, PROBE_VALUE, PROBE_TTL_SECS).await?;
        let value: Option<String> = conn.get(PROBE_KEY).await?;
        let _: () = conn.del(PROBE_KEY).await?;

        Ok(value.as_deref() == Some(PROBE_VALUE))
    }
}

#[async_trait::async_trait]
impl HealthProbe for CacheProbe {
    fn name(&self) -> &str {
        "cache"
    }

    async fn check(&self) -> ComponentHealth {
        let Some(url) = self.url.as_deref() else {
            return ComponentHealth::unknown("cache", "Redis URL not configured");
        };
        debug!("Performing Redis health check");

        let start_time = Instant::now();
        match tokio::time::timeout(self.timeout, Self::round_trip(url)).await {
            Ok(Ok(true)) => ComponentHealth::healthy("cache", start_time.elapsed()),
            Ok(Ok(false)) => ComponentHealth::unhealthy(
                "cache",
                "Redis operation failed",
                Some(start_time.elapsed()),
            ),
            Ok(Err(e)) => ComponentHealth::unhealthy("cache", e.to_string(), None),
            Err(_) => {
                ComponentHealth::unhealthy("cache", timeout_message("Redis", self.timeout), None)
            }
        }
    }
}
