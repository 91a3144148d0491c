//! Records exchanged with the proxy services

use serde::{Deserialize, Serialize};

/// One entry of the proxy directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyRecord {
    pub proxy_ip: String,
    pub proxy_port: String,
    /// ISO country code, uppercase as published by the directory
    pub country: String,
    pub org: String,
}

impl ProxyRecord {
    /// `ip:port` pair of this proxy
    pub fn address(&self) -> String {
        format!("{}:{}", self.proxy_ip, self.proxy_port)
    }
}

/// Verdict returned by the health checker
///
/// The checker's schema is not ours, so the document is carried as-is
/// and only ever pretty-printed back to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HealthResult(pub serde_json::Value);

impl HealthResult {
    /// Render the verdict as indented JSON
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}
