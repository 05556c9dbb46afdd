//! Monitored service endpoints

use super::*;
use serde::{Deserialize, Serialize};

/// Endpoints of every monitored dependency. `None` means the dependency is
/// not configured and its probe reports `unknown`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    /// Blockchain node base URL
    #[serde(default = "default_node_url")]
    pub node_url: Option<String>,
    /// Account address, carried for operators but not used by any probe
    #[serde(default)]
    pub account_address: Option<String>,
    /// Postgres connection string
    #[serde(default)]
    pub database_url: Option<String>,
    /// Redis connection string
    #[serde(default)]
    pub redis_url: Option<String>,
    /// API gateway base URL
    #[serde(default = "default_api_gateway_url")]
    pub api_gateway_url: Option<String>,
    /// Indexer service base URL
    #[serde(default = "default_indexer_url")]
    pub indexer_url: Option<String>,
    /// Liquidity service base URL
    #[serde(default = "default_liquidity_url")]
    pub liquidity_url: Option<String>,
    /// Stablecoin service base URL
    #[serde(default = "default_stablecoin_url")]
    pub stablecoin_url: Option<String>,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            node_url: default_node_url(),
            account_address: None,
            database_url: None,
            redis_url: None,
            api_gateway_url: default_api_gateway_url(),
            indexer_url: default_indexer_url(),
            liquidity_url: default_liquidity_url(),
            stablecoin_url: default_stablecoin_url(),
        }
    }
}

impl ServicesConfig {
    /// URLs that must parse as absolute `http(s)` URLs when present
    pub(crate) fn http_endpoints(&self) -> [(&'static str, Option<&str>); 5] {
        [
            ("node_url", self.node_url.as_deref()),
            ("api_gateway_url", self.api_gateway_url.as_deref()),
            ("indexer_url", self.indexer_url.as_deref()),
            ("liquidity_url", self.liquidity_url.as_deref()),
            ("stablecoin_url", self.stablecoin_url.as_deref()),
        ]
    }
}
