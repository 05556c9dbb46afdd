//! Monitoring loop
//!
//! Drives health checks, alerting and reporting on a fixed interval. Every
//! failure inside an iteration is contained at the loop; only the shutdown
//! signal ends continuous monitoring.

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::time::Duration;

use futures::FutureExt;
use tracing::{error, info};

use super::alerts::{AlertManager, AlertSeverity};
use super::health::{HealthChecker, SystemHealth};
use super::report::generate_report;
use crate::config::Config;
use crate::utils::error::{MonitorError, Result};

/// Periodic health monitor
#[derive(Debug)]
pub struct HealthMonitor {
    checker: HealthChecker,
    alerts: AlertManager,
    interval: Duration,
    /// Snapshot of the most recent successful cycle
    last_status: Option<SystemHealth>,
    /// Iterations started by `run_continuous`, successful or not
    cycles: u64,
}

impl HealthMonitor {
    pub fn new(checker: HealthChecker, alerts: AlertManager, interval: Duration) -> Self {
        Self {
            checker,
            alerts,
            interval,
            last_status: None,
            cycles: 0,
        }
    }

    /// Build a monitor with the standard probes for `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        let checker = HealthChecker::from_config(config)?;
        let alerts = AlertManager::new(&config.alerting)?;
        Ok(Self::new(checker, alerts, config.monitor.interval()))
    }

    /// Last known state, `None` before the first successful cycle
    pub fn last_status(&self) -> Option<&SystemHealth> {
        self.last_status.as_ref()
    }

    pub fn alerts(&self) -> &AlertManager {
        &self.alerts
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Report for the last known state
    pub fn report(&self) -> String {
        generate_report(self.last_status.as_ref())
    }

    /// Run the health checks once and remember the result
    pub async fn run_once(&mut self) -> Result<SystemHealth> {
        let health_status = self.checker.check_all().await?;
        self.last_status = Some(health_status.clone());
        Ok(health_status)
    }

    /// One monitoring iteration: check, alert when unhealthy, log the report
    pub async fn run_cycle(&mut self) -> Result<()> {
        let health_status = self.run_once().await?;

        if let Some(unhealthy) = &health_status.unhealthy_components {
            let message = format!(
                "Platform health check failed. Unhealthy components: {}",
                unhealthy.join(", ")
            );
            self.alerts.send_alert(&message, AlertSeverity::Critical).await;
        }

        info!("{}", self.report());
        Ok(())
    }

    /// Run until `shutdown` resolves.
    ///
    /// Shutdown is observed both while a cycle is running and while sleeping.
    pub async fn run_continuous<F>(&mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        info!(
            "Starting continuous health monitoring every {}s ({} components)",
            self.interval.as_secs_f64(),
            self.checker.registry().len()
        );
        tokio::pin!(shutdown);

        loop {
            self.cycles += 1;

            let outcome = tokio::select! {
                result = AssertUnwindSafe(self.run_cycle()).catch_unwind() => Some(result),
                _ = &mut shutdown => None,
            };

            match outcome {
                None => break,
                Some(Ok(Ok(()))) => {}
                Some(Ok(Err(e))) => self.handle_cycle_error(e).await,
                Some(Err(panic)) => {
                    let e = MonitorError::monitoring(format!(
                        "health cycle panicked: {}",
                        panic_message(panic.as_ref())
                    ));
                    self.handle_cycle_error(e).await;
                }
            }

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = &mut shutdown => break,
            }
        }

        info!("Health monitoring stopped");
    }

    async fn handle_cycle_error(&self, e: MonitorError) {
        error!("Error in health monitoring: {}", e);
        self.alerts
            .send_alert(&format!("Health monitoring error: {}", e), AlertSeverity::Critical)
            .await;
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
