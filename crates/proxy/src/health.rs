//! Proxy health-check client

use crate::model::HealthResult;
use crate::{ProxyError, Result};

/// Client for the remote proxy health-check API
#[derive(Clone)]
pub struct HealthChecker {
    client: reqwest::Client,
    endpoint: String,
}

impl HealthChecker {
    /// Create a checker that queries `endpoint?ip=host:port`
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Probe a single proxy
    ///
    /// # Errors
    /// Returns an error on transport failure, non-success status, or a
    /// body that is not JSON
    pub async fn check(&self, host: &str, port: &str) -> Result<HealthResult> {
        let target = format!("{}:{}", host, port);
        tracing::info!("Checking proxy health for {}", target);

        let resp = self
            .client
            .get(&self.endpoint)
            .query(&[("ip", target.as_str())])
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| {
                tracing::error!("Health check for {} failed: {}", target, e);
                e
            })?;

        let body = resp.text().await?;
        serde_json::from_str(&body)
            .map(HealthResult)
            .map_err(|e| ProxyError::InvalidResponse(format!("health check body: {}", e)))
    }
}
