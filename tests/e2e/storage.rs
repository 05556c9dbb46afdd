//! E2E tests for the database and cache probes
//!
//! Run with: TEST_DATABASE_URL=postgres://... TEST_REDIS_URL=redis://... cargo test -- --ignored storage

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use health_monitor::monitoring::health::{CacheProbe, DatabaseProbe};
    use health_monitor::{HealthProbe, HealthStatus};

    use crate::skip_without_env;

    #[tokio::test]
    #[ignore]
    async fn test_database_probe_counts_rows() {
        skip_without_env!("TEST_DATABASE_URL");
        let url = std::env::var("TEST_DATABASE_URL").unwrap();

        let health = DatabaseProbe::new(Some(url), Duration::from_secs(10))
            .check()
            .await;

        assert_eq!(
            health.status,
            HealthStatus::Healthy,
            "database probe failed: {:?}",
            health.error
        );
        let counts = &health.details["counts"];
        for table in ["markets", "bets", "users"] {
            assert!(counts[table].is_i64(), "missing row count for {}", table);
        }
    }

    #[tokio::test]
    #[ignore]
    async fn test_cache_probe_round_trip() {
        skip_without_env!("TEST_REDIS_URL");
        let url = std::env::var("TEST_REDIS_URL").unwrap();

        let health = CacheProbe::new(Some(url), Duration::from_secs(10))
            .check()
            .await;

        assert_eq!(
            health.status,
            HealthStatus::Healthy,
            "cache probe failed: {:?}",
            health.error
        );
        assert!(health.response_time.is_some());
    }
}
