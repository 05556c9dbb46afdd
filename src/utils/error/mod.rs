//! Error handling for the health monitor
//!
//! This module defines the error type used by configuration loading, probes and
//! the alerting path.

mod helpers;
mod types;

pub use types::{MonitorError, Result};
