//! health-monitor - platform dependency health monitor
//!
//! `--once` runs a single cycle and exits 1 when the platform is unhealthy;
//! without it the monitor runs until interrupted.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use health_monitor::utils::{init_logging, sanitize_url, shutdown_signal};
use health_monitor::{Config, HealthMonitor, Result, generate_report};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "health-monitor", version, about = "Platform dependency health monitor")]
struct Cli {
    /// Run one health check cycle, print the report and exit
    #[arg(long)]
    once: bool,

    /// Print the single-shot result as JSON instead of text
    #[arg(long, requires = "once")]
    json: bool,

    /// Load configuration from a YAML file instead of the environment
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

async fn load_config(cli: &Cli) -> Result<Config> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: failed to load .env file: {}", e);
        }
    }

    match &cli.config {
        Some(path) => Config::from_file(path).await,
        None => Config::from_env(),
    }
}

fn log_configuration(config: &Config) {
    let services = &config.services;
    let endpoints = [
        ("node", &services.node_url),
        ("database", &services.database_url),
        ("cache", &services.redis_url),
        ("api_gateway", &services.api_gateway_url),
        ("indexer", &services.indexer_url),
        ("liquidity", &services.liquidity_url),
        ("stablecoin", &services.stablecoin_url),
    ];
    for (component, url) in endpoints {
        match url {
            Some(url) => info!("{}: {}", component, sanitize_url(url)),
            None => info!("{}: not configured", component),
        }
    }
    info!(
        "Check interval {}s, alerting {}",
        config.monitor.check_interval,
        if config.alerting.enabled { "enabled" } else { "disabled" }
    );
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    log_configuration(&config);

    let mut monitor = match HealthMonitor::from_config(&config) {
        Ok(monitor) => monitor,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if !cli.once {
        monitor.run_continuous(shutdown_signal()).await;
        return ExitCode::SUCCESS;
    }

    let health = match monitor.run_once().await {
        Ok(health) => health,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&health) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", generate_report(Some(&health)));
    }

    ExitCode::from(health.exit_status())
}
