//! Health checking types and data structures

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

/// Names of the monitored components, in report order
pub const COMPONENT_NAMES: [&str; 7] = [
    "node",
    "database",
    "cache",
    "api_gateway",
    "indexer",
    "liquidity",
    "stablecoin",
];

/// Status of a single component or of the whole system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
    /// The dependency is not configured, so it was never probed
    Unknown,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Unhealthy => "unhealthy",
            HealthStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one probe
#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    /// Component name
    pub name: String,
    /// Component status
    pub status: HealthStatus,
    /// Round-trip time of the probe I/O, when a round trip completed
    #[serde(
        serialize_with = "serialize_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub response_time: Option<Duration>,
    /// Error message, present whenever the status is not healthy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Component-specific fields
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub details: HashMap<String, serde_json::Value>,
    /// Record creation timestamp
    pub last_updated: DateTime<Utc>,
}

impl ComponentHealth {
    pub fn healthy(name: impl Into<String>, response_time: Duration) -> Self {
        Self {
            name: name.into(),
            status: HealthStatus::Healthy,
            response_time: Some(response_time),
            error: None,
            details: HashMap::new(),
            last_updated: Utc::now(),
        }
    }

    pub fn unhealthy(
        name: impl Into<String>,
        error: impl Into<String>,
        response_time: Option<Duration>,
    ) -> Self {
        Self {
            name: name.into(),
            status: HealthStatus::Unhealthy,
            response_time,
            error: Some(error.into()),
            details: HashMap::new(),
            last_updated: Utc::now(),
        }
    }

    pub fn unknown(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: HealthStatus::Unknown,
            response_time: None,
            error: Some(error.into()),
            details: HashMap::new(),
            last_updated: Utc::now(),
        }
    }

    /// Attach component-specific detail fields
    pub fn with_details(mut self, details: HashMap<String, serde_json::Value>) -> Self {
        self.details = details;
        self
    }

    #[inline]
    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy
    }
}

/// One monitoring cycle's result
#[derive(Debug, Clone, Serialize)]
pub struct SystemHealth {
    /// Start-of-cycle time
    pub timestamp: DateTime<Utc>,
    /// Overall status, `healthy` or `unhealthy`
    pub overall_status: HealthStatus,
    /// Component results in registry order
    pub components: Vec<ComponentHealth>,
    /// Names of unhealthy components, present only when overall is unhealthy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unhealthy_components: Option<Vec<String>>,
}

impl SystemHealth {
    /// Reduce component results into a snapshot.
    ///
    /// Only `unhealthy` components fail the system; `unknown` components are
    /// unconfigured rather than broken and leave the overall status alone.
    pub fn from_components(timestamp: DateTime<Utc>, components: Vec<ComponentHealth>) -> Self {
        let unhealthy: Vec<String> = components
            .iter()
            .filter(|c| c.status == HealthStatus::Unhealthy)
            .map(|c| c.name.clone())
            .collect();

        let (overall_status, unhealthy_components) = if unhealthy.is_empty() {
            (HealthStatus::Healthy, None)
        } else {
            (HealthStatus::Unhealthy, Some(unhealthy))
        };

        Self {
            timestamp,
            overall_status,
            components,
            unhealthy_components,
        }
    }

    /// Look up a component by name
    pub fn component(&self, name: &str) -> Option<&ComponentHealth> {
        self.components.iter().find(|c| c.name == name)
    }

    #[inline]
    pub fn is_healthy(&self) -> bool {
        self.overall_status == HealthStatus::Healthy
    }

    /// Process exit status for single-shot runs
    pub fn exit_status(&self) -> u8 {
        if self.is_healthy() { 0 } else { 1 }
    }
}

fn serialize_secs<S>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(duration) => serializer.serialize_f64(duration.as_secs_f64()),
        None => serializer.serialize_none(),
    }
}
