//! Configuration management for the health monitor
//!
//! Configuration is read once at startup, either from the environment or from a
//! YAML file, and is immutable for the lifetime of the process.

pub mod env;
pub mod models;

pub use env::EnvUtils;
pub use models::*;

use crate::monitoring::health::COMPONENT_NAMES;
use crate::utils::error::{MonitorError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the monitor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Monitored service endpoints
    #[serde(default)]
    pub services: ServicesConfig,
    /// Loop configuration
    #[serde(default)]
    pub monitor: MonitorConfig,
    /// Alerting configuration
    #[serde(default)]
    pub alerting: AlertingConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| MonitorError::config(format!("Failed to read config file: {}", e)))?;

        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| MonitorError::config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        // Provider-named variables apply when the generic name is unset
        let services = ServicesConfig {
            node_url: EnvUtils::get_env_var_aliased(
                "NODE_URL",
                "APTOS_NODE_URL",
                default_node_url(),
            ),
            account_address: EnvUtils::get_env_var("ACCOUNT_ADDRESS"),
            database_url: EnvUtils::get_env_var("DATABASE_URL"),
            redis_url: EnvUtils::get_env_var("REDIS_URL"),
            api_gateway_url: EnvUtils::get_env_var_or("API_GATEWAY_URL", default_api_gateway_url()),
            indexer_url: EnvUtils::get_env_var_aliased(
                "INDEXER_URL",
                "NODIT_URL",
                default_indexer_url(),
            ),
            liquidity_url: EnvUtils::get_env_var_aliased(
                "LIQUIDITY_URL",
                "HYPERION_URL",
                default_liquidity_url(),
            ),
            stablecoin_url: EnvUtils::get_env_var_aliased(
                "STABLECOIN_URL",
                "CIRCLE_URL",
                default_stablecoin_url(),
            ),
        };

        let monitor = MonitorConfig {
            check_interval: EnvUtils::get_numeric_config(
                "HEALTH_CHECK_INTERVAL",
                default_check_interval(),
            )
            .map_err(MonitorError::config)?,
            probe_timeout: EnvUtils::get_numeric_config("PROBE_TIMEOUT", default_timeout())
                .map_err(MonitorError::config)?,
            required_components: EnvUtils::get_list_config("REQUIRED_COMPONENTS"),
        };

        let alerting = AlertingConfig {
            enabled: EnvUtils::get_bool_config("ALERTING_ENABLED", true),
            webhook_url: EnvUtils::get_env_var("ALERT_WEBHOOK_URL"),
            webhook_timeout: EnvUtils::get_numeric_config("ALERT_WEBHOOK_TIMEOUT", default_timeout())
                .map_err(MonitorError::config)?,
        };

        let logging = LoggingConfig {
            level: EnvUtils::get_env_var("LOG_LEVEL").unwrap_or_else(default_log_level),
            format: match EnvUtils::get_env_var("LOG_FORMAT") {
                Some(format) => format.parse().map_err(MonitorError::config)?,
                None => LogFormat::default(),
            },
        };

        let config = Self {
            services,
            monitor,
            alerting,
            logging,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        if self.monitor.check_interval == 0 {
            return Err(MonitorError::config("check interval must be greater than 0"));
        }
        if self.monitor.probe_timeout == 0 {
            return Err(MonitorError::config("probe timeout must be greater than 0"));
        }
        if self.alerting.webhook_timeout == 0 {
            return Err(MonitorError::config("webhook timeout must be greater than 0"));
        }

        for (field, value) in self.services.http_endpoints() {
            if let Some(value) = value {
                validate_url(field, value, &["http", "https"])?;
            }
        }
        if let Some(url) = &self.services.database_url {
            validate_url("database_url", url, &["postgres", "postgresql"])?;
        }
        if let Some(url) = &self.services.redis_url {
            validate_url("redis_url", url, &["redis", "rediss"])?;
        }
        if let Some(url) = &self.alerting.webhook_url {
            validate_url("webhook_url", url, &["http", "https"])?;
        }

        for name in &self.monitor.required_components {
            if !COMPONENT_NAMES.contains(&name.as_str()) {
                return Err(MonitorError::validation(format!(
                    "unknown required component '{}', expected one of: {}",
                    name,
                    COMPONENT_NAMES.join(", ")
                )));
            }
        }

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

fn validate_url(field: &str, value: &str, schemes: &[&str]) -> Result<()> {
    let parsed = url::Url::parse(value)
        .map_err(|e| MonitorError::config(format!("{} is not a valid URL: {}", field, e)))?;
    if !schemes.contains(&parsed.scheme()) {
        return Err(MonitorError::config(format!(
            "{} must use one of the schemes [{}], got '{}'",
            field,
            schemes.join(", "),
            parsed.scheme()
        )));
    }
    Ok(())
}
