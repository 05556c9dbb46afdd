//! Configuration data models
//!
//! This module defines all configuration structures used by the monitor.

#![allow(missing_docs)]

pub mod alerting;
pub mod logging;
pub mod monitor;
pub mod services;

// Re-export all configuration types
pub use alerting::*;
pub use logging::*;
pub use monitor::*;
pub use services::*;

/// Default check interval in seconds
pub fn default_check_interval() -> u64 {
    30
}

/// Default timeout in seconds for probes and webhook delivery
pub fn default_timeout() -> u64 {
    10
}

pub fn default_true() -> bool {
    true
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_node_url() -> Option<String> {
    Some("https://fullnode.mainnet.aptoslabs.com".to_string())
}

pub fn default_api_gateway_url() -> Option<String> {
    Some("http://localhost:3000".to_string())
}

pub fn default_indexer_url() -> Option<String> {
    Some("http://localhost:3001".to_string())
}

pub fn default_liquidity_url() -> Option<String> {
    Some("http://localhost:3002".to_string())
}

pub fn default_stablecoin_url() -> Option<String> {
    Some("http://localhost:3003".to_string())
}
