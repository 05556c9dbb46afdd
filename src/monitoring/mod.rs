//! Monitoring system
//!
//! Health probes and aggregation, alerting, reporting and the loop that ties
//! them together.

// Public submodules
pub mod alerts;
pub mod health;
pub mod monitor;
pub mod report;

// Re-export public types
pub use alerts::{AlertManager, AlertSeverity};
pub use health::{ComponentHealth, HealthChecker, HealthStatus, SystemHealth};
pub use monitor::HealthMonitor;
pub use report::generate_report;
