//! Health checking system
//!
//! Probes for every monitored dependency, the registry that holds them and the
//! checker that reduces their results into a [`SystemHealth`] snapshot.

mod checker;
pub mod components;
mod probe;
mod types;


// Re-export public types
pub use checker::HealthChecker;
pub use components::{CacheProbe, DatabaseProbe, HttpProbe};
pub use probe::{HealthProbe, ProbeRegistry};
pub use types::{COMPONENT_NAMES, ComponentHealth, HealthStatus, SystemHealth};
