//! Postgres probe

use std::collections::HashMap;
use std::time::{Duration, Instant};

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use tracing::{debug, warn};

use crate::monitoring::health::probe::{HealthProbe, timeout_message};
use crate::monitoring::health::types::ComponentHealth;
use crate::utils::error::{MonitorError, Result};

/// Tables whose row counts are reported on success
pub const COUNTED_TABLES: [&str; 3] = ["markets", "bets", "users"];

/// Opens a dedicated connection per check, runs `SELECT 1` and the row count
/// query, then closes the connection.
#[derive(Debug, Clone)]
pub struct DatabaseProbe {
    url: Option<String>,
    timeout: Duration,
}

impl DatabaseProbe {
    pub fn new(url: Option<String>, timeout: Duration) -> Self {
        Self { url, timeout }
    }

    async fn row_counts(&self, url: &str) -> Result<HashMap<String, i64>> {
        let mut opt = ConnectOptions::new(url.to_string());
        opt.max_connections(1)
            .min_connections(0)
            .connect_timeout(self.timeout)
            .acquire_timeout(self.timeout)
            .sqlx_logging(false);

        let db = Database::connect(opt).await?;
        let result = run_queries(&db).await;

        if let Err(e) = db.close().await {
            warn!("Failed to close database probe connection: {}", e);
        }
        result
    }
}

async fn run_queries(db: &DatabaseConnection) -> Result<HashMap<String, i64>> {
    let backend = db.get_database_backend();

    db.query_one(Statement::from_string(backend, "SELECT 1"))
        .await?
        .ok_or_else(|| MonitorError::monitoring("SELECT 1 returned no rows"))?;

    let row = db
        .query_one(Statement::from_string(backend, row_count_query()))
        .await?
        .ok_or_else(|| MonitorError::monitoring("row count query returned no rows"))?;

    let mut counts = HashMap::with_capacity(COUNTED_TABLES.len());
    for table in COUNTED_TABLES {
        counts.insert(table.to_string(), row.try_get::<i64>("", table)?);
    }
    Ok(counts)
}

/// One round trip for all table counts
fn row_count_query() -> String {
    let columns: Vec<String> = COUNTED_TABLES
        .iter()
        .map(|table| format!("(SELECT COUNT(*) FROM {table}) AS {table}"))
        .collect();
    format!("SELECT {}", columns.join(", "))
}

#[async_trait::async_trait]
impl HealthProbe for DatabaseProbe {
    fn name(&self) -> &str {
        "database"
    }

    async fn check(&self) -> ComponentHealth {
        let Some(url) = self.url.as_deref() else {
            return ComponentHealth::unknown("database", "Database URL not configured");
        };
        debug!("Performing database health check");

        let start_time = Instant::now();
        match tokio::time::timeout(self.timeout, self.row_counts(url)).await {
            Ok(Ok(counts)) => {
                let response_time = start_time.elapsed();
                let mut details = HashMap::new();
                details.insert("counts".to_string(), serde_json::json!(counts));
                ComponentHealth::healthy("database", response_time).with_details(details)
            }
            Ok(Err(e)) => ComponentHealth::unhealthy("database", e.to_string(), None),
            Err(_) => ComponentHealth::unhealthy(
                "database",
                timeout_message("Database", self.timeout),
                None,
            ),
        }
    }
}
