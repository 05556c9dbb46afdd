//! Integration tests for health-monitor
//!
//! These tests run the real probes, alert channels and monitor against
//! wiremock servers.

pub mod config_tests;
pub mod monitor_tests;
