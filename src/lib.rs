//! # health-monitor
//!
//! Periodic health aggregation for the platform's dependencies: the blockchain
//! node, Postgres, Redis, the API gateway and the indexer, liquidity and
//! stablecoin services.
//!
//! Each cycle runs one probe per dependency, reduces the results into a
//! [`SystemHealth`] snapshot, raises a critical alert when any component is
//! unhealthy and logs a text report.
//!
//! ```rust,no_run
//! use health_monitor::{Config, HealthMonitor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let mut monitor = HealthMonitor::from_config(&config)?;
//!
//!     let health = monitor.run_once().await?;
//!     println!("{}", monitor.report());
//!     std::process::exit(health.exit_status().into());
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod monitoring;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use monitoring::alerts::{AlertManager, AlertSeverity};
pub use monitoring::health::{
    COMPONENT_NAMES, ComponentHealth, HealthChecker, HealthProbe, HealthStatus, ProbeRegistry,
    SystemHealth,
};
pub use monitoring::monitor::HealthMonitor;
pub use monitoring::report::{NO_DATA_REPORT, generate_report};
pub use utils::error::{MonitorError, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
