//! Full monitoring cycle tests

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use health_monitor::config::Config;
    use health_monitor::{
        AlertManager, COMPONENT_NAMES, HealthChecker, HealthMonitor, HealthStatus, ProbeRegistry,
        generate_report,
    };
    use serde_json::json;
    use tokio_test::assert_ok;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::common::{StaticProbe, config_for, mount_all_healthy};

    #[tokio::test]
    async fn test_single_shot_healthy_platform() {
        let server = MockServer::start().await;
        mount_all_healthy(&server).await;

        let mut monitor = assert_ok!(HealthMonitor::from_config(&config_for(&server.uri())));
        let health = assert_ok!(monitor.run_once().await);

        assert_eq!(health.overall_status, HealthStatus::Healthy);
        assert_eq!(health.exit_status(), 0);
        assert!(health.unhealthy_components.is_none());
        assert_eq!(health.components.len(), COMPONENT_NAMES.len());

        // Unconfigured storage does not fail the platform
        let database = health.component("database").unwrap();
        assert_eq!(database.status, HealthStatus::Unknown);
        assert_eq!(database.error.as_deref(), Some("Database URL not configured"));
        let cache = health.component("cache").unwrap();
        assert_eq!(cache.status, HealthStatus::Unknown);
        assert_eq!(cache.error.as_deref(), Some("Redis URL not configured"));

        let gateway = health.component("api_gateway").unwrap();
        assert_eq!(gateway.details["uptime"], json!(3600));
        assert_eq!(gateway.details["version"], json!("1.4.2"));
        let liquidity = health.component("liquidity").unwrap();
        assert_eq!(liquidity.details["total_yield"], json!("3250"));
        let stablecoin = health.component("stablecoin").unwrap();
        assert_eq!(stablecoin.details["usdc_balance"], json!("250000"));
    }

    #[tokio::test]
    async fn test_single_shot_unhealthy_node() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1"))
            .respond_with(ResponseTemplate::new(502))
            .with_priority(1)
            .mount(&server)
            .await;
        mount_all_healthy(&server).await;

        let mut monitor = assert_ok!(HealthMonitor::from_config(&config_for(&server.uri())));
        let health = assert_ok!(monitor.run_once().await);

        assert_eq!(health.overall_status, HealthStatus::Unhealthy);
        assert_eq!(health.exit_status(), 1);
        assert_eq!(health.unhealthy_components, Some(vec!["node".to_string()]));

        let report = generate_report(Some(&health));
        assert!(report.contains("Overall Status: UNHEALTHY"));
        assert!(report.contains("  Node: UNHEALTHY\n    Error: HTTP 502\n"));
        assert!(report.contains("  Api Gateway: HEALTHY\n"));
        assert!(report.ends_with("\nUnhealthy Components: node\n"));
    }

    #[tokio::test]
    async fn test_required_component_must_be_configured() {
        let server = MockServer::start().await;
        mount_all_healthy(&server).await;

        let mut config = config_for(&server.uri());
        config.monitor.required_components = vec!["database".to_string()];

        let mut monitor = assert_ok!(HealthMonitor::from_config(&config));
        let health = assert_ok!(monitor.run_once().await);

        assert_eq!(health.exit_status(), 1);
        assert_eq!(
            health.unhealthy_components,
            Some(vec!["database".to_string()])
        );
        assert_eq!(
            health.component("database").unwrap().error.as_deref(),
            Some("Database URL not configured (required)")
        );
    }

    #[tokio::test]
    async fn test_unhealthy_cycle_posts_critical_alert() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/alerts"))
            .and(body_partial_json(json!({
                "severity": "critical",
                "message": "Platform health check failed. Unhealthy components: api_gateway, indexer, liquidity, stablecoin"
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let mut config = config_for(&server.uri());
        config.alerting.webhook_url = Some(format!("{}/alerts", server.uri()));

        let mut monitor = assert_ok!(HealthMonitor::from_config(&config));
        assert_ok!(monitor.run_cycle().await);

        assert_eq!(monitor.alerts().stats().total_alerts, 1);
        assert!(monitor.report().contains("Overall Status: UNHEALTHY"));
    }

    #[tokio::test]
    async fn test_healthy_cycle_sends_no_alert() {
        let server = MockServer::start().await;
        mount_all_healthy(&server).await;
        Mock::given(method("POST"))
            .and(path("/alerts"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut config = config_for(&server.uri());
        config.alerting.webhook_url = Some(format!("{}/alerts", server.uri()));

        let mut monitor = assert_ok!(HealthMonitor::from_config(&config));
        assert_ok!(monitor.run_cycle().await);

        assert_eq!(monitor.alerts().stats().total_alerts, 0);
    }

    #[tokio::test]
    async fn test_continuous_run_stops_on_shutdown() {
        let probe = StaticProbe::healthy("node");
        let registry = ProbeRegistry::new().with_probe(probe.clone());
        let mut monitor = HealthMonitor::new(
            HealthChecker::new(registry),
            AlertManager::disabled(),
            Duration::from_secs(3600),
        );

        monitor
            .run_continuous(tokio::time::sleep(Duration::from_millis(200)))
            .await;

        assert_eq!(monitor.cycles(), 1);
        assert_eq!(probe.calls(), 1);
        assert!(monitor.last_status().is_some_and(|h| h.is_healthy()));
    }

    #[tokio::test]
    async fn test_continuous_run_repeats_on_interval() {
        let probe = StaticProbe::unhealthy("indexer");
        let registry = ProbeRegistry::new().with_probe(probe.clone());
        let mut monitor = HealthMonitor::new(
            HealthChecker::new(registry),
            AlertManager::new(&Config::default().alerting).unwrap(),
            Duration::from_millis(50),
        );

        monitor
            .run_continuous(tokio::time::sleep(Duration::from_millis(400)))
            .await;

        assert!(monitor.cycles() >= 3);
        assert!(probe.calls() >= 3);
        // Alerts repeat every unhealthy cycle
        assert!(monitor.alerts().stats().total_alerts >= 3);
    }
}
