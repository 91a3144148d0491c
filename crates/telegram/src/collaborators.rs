//! Seams between the router and the proxy services
//!
//! The router only sees these traits, so tests can swap in doubles for
//! the network-backed clients from the `proxy` crate.

use async_trait::async_trait;
use proxy::{CloudflareApi, HealthChecker, HealthResult, HtmlRenderer, ProxyDirectory, ProxyRecord};

use crate::error::BotResult;

/// Source of the full proxy directory
#[async_trait]
pub trait ProxySource: Send + Sync {
    async fn proxy_list(&self) -> BotResult<Vec<ProxyRecord>>;
}

/// Health probe for a single proxy
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn check_health(&self, host: &str, port: &str) -> BotResult<HealthResult>;
}

/// Registers custom domains, answering with an HTTP-style status code
#[async_trait]
pub trait DomainRegistrar: Send + Sync {
    async fn register_domain(&self, domain: &str) -> BotResult<u16>;
}

/// Renders a page of the proxy list into the downloadable artifact
pub trait ArtifactRenderer: Send + Sync {
    fn render(&self, hostname: &str, proxies: &[ProxyRecord], page: usize) -> Vec<u8>;
}

#[async_trait]
impl ProxySource for ProxyDirectory {
    async fn proxy_list(&self) -> BotResult<Vec<ProxyRecord>> {
        Ok(self.fetch().await?)
    }
}

#[async_trait]
impl HealthProbe for HealthChecker {
    async fn check_health(&self, host: &str, port: &str) -> BotResult<HealthResult> {
        Ok(self.check(host, port).await?)
    }
}

#[async_trait]
impl DomainRegistrar for CloudflareApi {
    async fn register_domain(&self, domain: &str) -> BotResult<u16> {
        Ok(CloudflareApi::register_domain(self, domain).await?)
    }
}

impl ArtifactRenderer for HtmlRenderer {
    fn render(&self, hostname: &str, proxies: &[ProxyRecord], page: usize) -> Vec<u8> {
        HtmlRenderer::render(self, hostname, proxies, page).into_bytes()
    }
}
