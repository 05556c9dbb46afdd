//! HTTP endpoint probe

use std::collections::HashMap;
use std::time::{Duration, Instant};

use reqwest::StatusCode;
use tracing::debug;

use crate::monitoring::health::probe::{HealthProbe, timeout_message};
use crate::monitoring::health::types::ComponentHealth;
use crate::utils::error::{MonitorError, Result};

/// Probe for a service that exposes an HTTP health or info endpoint.
///
/// Healthy means `200 OK`. When detail fields are configured the body must be
/// a JSON object; the named fields are copied into the record, missing ones as
/// `null`.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    name: &'static str,
    label: &'static str,
    base_url: Option<String>,
    path: &'static str,
    detail_fields: &'static [&'static str],
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpProbe {
    pub fn new(
        name: &'static str,
        label: &'static str,
        base_url: Option<String>,
        path: &'static str,
        client: reqwest::Client,
        timeout: Duration,
    ) -> Self {
        Self {
            name,
            label,
            base_url,
            path,
            detail_fields: &[],
            client,
            timeout,
        }
    }

    pub fn with_detail_fields(mut self, fields: &'static [&'static str]) -> Self {
        self.detail_fields = fields;
        self
    }

    fn endpoint(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path)
    }

    fn describe(&self, error: reqwest::Error) -> String {
        if error.is_timeout() {
            timeout_message(self.label, self.timeout)
        } else {
            error.to_string()
        }
    }
}

#[async_trait::async_trait]
impl HealthProbe for HttpProbe {
    fn name(&self) -> &str {
        self.name
    }

    async fn check(&self) -> ComponentHealth {
        let Some(base_url) = self.base_url.as_deref() else {
            return ComponentHealth::unknown(
                self.name,
                format!("{} URL not configured", self.label),
            );
        };
        let url = self.endpoint(base_url);
        debug!("Probing {} at {}", self.name, url);

        let start_time = Instant::now();
        let response = match self.client.get(&url).timeout(self.timeout).send().await {
            Ok(response) => response,
            Err(e) => return ComponentHealth::unhealthy(self.name, self.describe(e), None),
        };

        let status = response.status();
        if status != StatusCode::OK {
            return ComponentHealth::unhealthy(
                self.name,
                format!("HTTP {}", status.as_u16()),
                Some(start_time.elapsed()),
            );
        }

        if self.detail_fields.is_empty() {
            return ComponentHealth::healthy(self.name, start_time.elapsed());
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => return ComponentHealth::unhealthy(self.name, self.describe(e), None),
        };
        let response_time = start_time.elapsed();

        match extract_details(&body, self.detail_fields) {
            Ok(details) => ComponentHealth::healthy(self.name, response_time).with_details(details),
            Err(e) => ComponentHealth::unhealthy(self.name, e.to_string(), Some(response_time)),
        }
    }
}

/// Pick `fields` out of a JSON object body
pub(crate) fn extract_details(
    body: &[u8],
    fields: &[&str],
) -> Result<HashMap<String, serde_json::Value>> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    let object = value
        .as_object()
        .ok_or_else(|| MonitorError::validation("health response is not a JSON object"))?;

    Ok(fields
        .iter()
        .map(|field| {
            let value = object.get(*field).cloned().unwrap_or(serde_json::Value::Null);
            (field.to_string(), value)
        })
        .collect())
}
